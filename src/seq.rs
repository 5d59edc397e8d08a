//! Higher-order operations: `filter`, `map`, `fold`, `reduce`, `generate`,
//! and `to_index_map`.
//!
//! None of these mutate their input. Each closure is called once per element,
//! in order, so closures with side effects see the elements left to right.
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

/// Returns a new `Vec` holding, in order, the elements of `a` for which
/// `keep` returns `true`.
pub fn filter<T: Clone>(a: &[T], mut keep: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut b = Vec::with_capacity(a.len());
    for item in a {
        if keep(item) {
            b.push(item.clone());
        }
    }
    b
}

/// Returns a new `Vec` whose `i`th element is `f(&a[i])`.
pub fn map<T, U>(a: &[T], f: impl FnMut(&T) -> U) -> Vec<U> {
    a.iter().map(f).collect()
}

/// Folds `a` into a single value, left to right, starting from `seed`:
/// `fold(&[x, y, z], s, f)` is `f(f(f(s, &x), &y), &z)`. An empty `a` returns
/// `seed` unchanged.
pub fn fold<T, A>(a: &[T], seed: A, f: impl FnMut(A, &T) -> A) -> A {
    a.iter().fold(seed, f)
}

/// Like `fold`, with the accumulator and result of the element type and the
/// seed fixed at `T::default()`. So `reduce(&[], f)` is `T::default()`, and
/// `reduce(&[x, y], f)` is `f(f(T::default(), &x), &y)`.
pub fn reduce<T: Default>(a: &[T], f: impl FnMut(T, &T) -> T) -> T {
    fold(a, T::default(), f)
}

/// Returns a `Vec` of length `n` whose `i`th element is `f(i)`. `f` is called
/// with `0`, `1`, ... `n - 1`, in that order.
pub fn generate<T>(f: impl FnMut(usize) -> T, n: usize) -> Vec<T> {
    (0..n).map(f).collect()
}

/// Returns a map from each index of `a` to a copy of the element at that index.
#[must_use]
pub fn to_index_map<T: Clone>(a: &[T]) -> IndexMap<usize, T, FxBuildHasher> {
    let mut m = IndexMap::with_capacity_and_hasher(a.len(), FxBuildHasher::default());
    for (i, item) in a.iter().enumerate() {
        m.insert(i, item.clone());
    }
    m
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;

    fn factor(n: usize) -> Vec<usize> {
        filter(&generate(|i| i + 1, n), |ai| n % ai == 0)
    }

    fn is_prime(n: usize) -> bool {
        factor(n).len() == 2
    }

    #[test]
    fn filter_and_generate_compose_into_a_prime_sieve() {
        let primes = filter(&generate(|i| i + 1, 40), |&ai| is_prime(ai));
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);
    }

    #[test]
    fn filter_keeps_order_and_leaves_input_alone() {
        let a = vec![5, 2, 8, 1, 9];
        let b = filter(&a, |&x| x > 2);
        assert_eq!(b, vec![5, 8, 9]);
        assert_eq!(a, vec![5, 2, 8, 1, 9]);
        assert!(filter(&Vec::<i32>::new(), |_| true).is_empty());
    }

    #[test]
    fn filter_calls_the_predicate_once_per_element() {
        let mut calls = 0;
        let _ = filter(&[1, 2, 3, 4], |_| {
            calls += 1;
            false
        });
        assert_eq!(calls, 4);
    }

    #[test]
    fn map_can_change_the_element_type() {
        let lengths = map(&["a", "bbb", ""], |s| s.len());
        assert_eq!(lengths, vec![1, 3, 0]);
        assert!(map(&[] as &[i32], |x| x * 2).is_empty());
    }

    #[test]
    fn fold_runs_left_to_right() {
        let sub = |acc: i32, x: &i32| acc - x;
        assert_eq!(fold(&[1, 2, 3], 0, sub), ((0 - 1) - 2) - 3);
        assert_eq!(fold(&[] as &[i32], 42, sub), 42);
        let joined = fold(&["a", "b", "c"], String::new(), |mut acc, s| {
            acc.push_str(s);
            acc
        });
        assert_eq!(joined, "abc");
    }

    #[test]
    fn reduce_starts_from_the_default_value() {
        assert_eq!(reduce(&[1, 2, 3, 4], |acc, x| acc + x), 10);
        assert_eq!(reduce(&[1, 2, 3], |acc, x| acc - x), -6);
        assert_eq!(reduce(&[] as &[i64], |acc, x| acc * x), 0);
        let s = reduce(&["x".to_string(), "y".to_string()], |acc, x| acc + x);
        assert_eq!(s, "xy");
    }

    #[test]
    fn generate_evaluates_increasing_indexes() {
        let mut seen = Vec::new();
        let squares = generate(
            |i| {
                seen.push(i);
                i * i
            },
            5,
        );
        assert_eq!(squares, vec![0, 1, 4, 9, 16]);
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert!(generate(|i| i, 0).is_empty());
    }

    #[test]
    fn to_index_map_pairs_indexes_with_values() {
        let m = to_index_map(&["zero", "one", "two"]);
        assert_eq!(m.len(), 3);
        assert_eq!(m[&1], "one");
        assert_eq!(m.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert!(to_index_map(&[] as &[u8]).is_empty());
    }
}
