//! Order-preserving set operations: `unique`, `remove`, and `remove_all`.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use std::hash::Hash;

/// A `BorrowedSet` holds references to the elements of its operands, in the
/// order they were first inserted. Elements are cloned only when the result
/// is built, so a long run of duplicates costs a hash lookup each, not a
/// clone each.
type BorrowedSet<'data, T> = IndexSet<&'data T, FxBuildHasher>;

/// Returns the distinct elements of `seqs`, taken as if the sequences had
/// been joined end to end. The first occurrence of each value is kept, and
/// the kept values appear in the order they were first seen, so
/// `unique(&[[3, 1, 3, 2]])` is `[3, 1, 2]`.
#[must_use]
pub fn unique<T: Eq + Hash + Clone, S: AsRef<[T]>>(seqs: &[S]) -> Vec<T> {
    let n = seqs.iter().map(|s| s.as_ref().len()).sum();
    let mut set = BorrowedSet::with_capacity_and_hasher(n, FxBuildHasher::default());
    for s in seqs {
        set.extend(s.as_ref());
    }
    set.into_iter().cloned().collect()
}

/// Returns a new `Vec` holding, in order, the elements of `a` that are not
/// equal to any of `values`.
#[must_use]
pub fn remove<T: PartialEq + Clone>(a: &[T], values: &[T]) -> Vec<T> {
    crate::filter(a, |x| !values.contains(x))
}

/// Returns a new `Vec` holding, in order, the elements of `a` that are not
/// equal to `v`.
#[must_use]
pub fn remove_all<T: PartialEq + Clone>(a: &[T], v: &T) -> Vec<T> {
    crate::filter(a, |x| x != v)
}
