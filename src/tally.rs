//! Counting occurrences: `count` for one value, `freq` for every value.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use std::hash::Hash;

/// Maps each distinct value to the number of times it occurs. Iteration
/// order is the order in which values were first seen.
pub type Frequencies<T> = IndexMap<T, usize, FxBuildHasher>;

/// Returns the number of elements of `a` equal to `v`.
#[must_use]
pub fn count<T: PartialEq>(a: &[T], v: &T) -> usize {
    a.iter().filter(|&x| x == v).count()
}

/// Returns the frequency of each distinct element of `a`. Every count is at
/// least 1, and the counts sum to `a.len()`.
#[must_use]
pub fn freq<T: Eq + Hash + Clone>(a: &[T]) -> Frequencies<T> {
    let mut tally = Frequencies::default();
    for item in a {
        tally.entry(item.clone()).and_modify(|n| *n += 1).or_insert(1);
    }
    tally
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn count_counts_one_value() {
        assert_eq!(count(&[1, 2, 2, 3, 2], &2), 3);
        assert_eq!(count(&[1, 2, 3], &9), 0);
        assert_eq!(count(&[] as &[i32], &1), 0);
    }

    #[test]
    fn freq_counts_every_value_in_first_seen_order() {
        let lines = ["x", "X", "Ex", "Eks", "x", "x", "X"];
        let f = freq(&lines);
        let pairs: Vec<(&str, usize)> = f.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(pairs, vec![("x", 3), ("X", 2), ("Ex", 1), ("Eks", 1)]);
        assert_eq!(f.values().sum::<usize>(), lines.len());
    }

    #[test]
    fn freq_of_nothing_is_empty() {
        assert!(freq(&[] as &[u64]).is_empty());
    }

    #[test]
    fn freq_agrees_with_count() {
        let a = [5, 1, 5, 5, 2, 1];
        for (value, n) in freq(&a) {
            assert_eq!(count(&a, &value), n, "for {value}");
        }
    }
}
