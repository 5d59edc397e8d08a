//! Searching and comparing sequences.
//!
//! A search that finds nothing returns the length of the sequence searched,
//! never a special value like `usize::MAX`, so `search(a, v) < a.len()` is the
//! test for "found".

use std::cmp::Ordering;

/// Returns the smallest index `i` with `a[i] == *v`, or `a.len()` if there is
/// none.
#[must_use]
pub fn search<T: PartialEq>(a: &[T], v: &T) -> usize {
    a.iter().position(|x| x == v).unwrap_or(a.len())
}

/// Returns `true` if any element of `a` equals any of `values`. An empty
/// `values` is never contained.
#[must_use]
pub fn contains<T: PartialEq>(a: &[T], values: &[T]) -> bool {
    a.iter().any(|x| values.contains(x))
}

/// Returns the smallest index at which `sub` occurs as a contiguous run of
/// `a`, or `a.len()` if it doesn't occur. An empty `sub` is never found.
#[must_use]
pub fn search_sub_slice<T: PartialEq>(a: &[T], sub: &[T]) -> usize {
    if sub.is_empty() || sub.len() > a.len() {
        return a.len();
    }
    a.windows(sub.len()).position(|window| window == sub).unwrap_or(a.len())
}

/// Compares `a` and `b` lexicographically: the first unequal pair of elements
/// decides, and if one sequence is a prefix of the other the shorter one is
/// `Less`. Elements that are neither less nor greater than each other (a NaN,
/// say) count as equal.
///
/// `compare(a, b) as i8` gives the conventional `-1`, `0`, or `1`.
#[must_use]
pub fn compare<T: PartialOrd>(a: &[T], b: &[T]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        if x < y {
            return Ordering::Less;
        }
        if y < x {
            return Ordering::Greater;
        }
    }
    a.len().cmp(&b.len())
}

/// Returns `true` if `a` and `b` have the same length and equal elements at
/// every index.
#[must_use]
pub fn equal<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
}
