//! Operations that copy, cut, concatenate, resize, or rearrange a sequence.
//!
//! Everything here except `swap` returns a freshly allocated `Vec`. Indexes
//! outside the sequence are programming errors, so they panic rather than
//! being clamped.

/// Returns a copy of `a` in a new allocation.
#[must_use]
pub fn copy<T: Clone>(a: &[T]) -> Vec<T> {
    a.to_vec()
}

/// Returns a copy of `a[i..j]`.
///
/// # Panics
///
/// Panics if `i > j` or `j > a.len()`.
#[must_use]
pub fn sub_slice<T: Clone>(a: &[T], i: usize, j: usize) -> Vec<T> {
    a[i..j].to_vec()
}

/// Concatenates `seqs`, in order, into one new `Vec`. Joining no sequences
/// gives an empty `Vec`.
#[must_use]
pub fn join<T: Clone, S: AsRef<[T]>>(seqs: &[S]) -> Vec<T> {
    let n = seqs.iter().map(|s| s.as_ref().len()).sum();
    let mut a = Vec::with_capacity(n);
    for s in seqs {
        a.extend_from_slice(s.as_ref());
    }
    a
}

/// Returns a `Vec` of exactly `length` elements with room for at least
/// `capacity`. The first `min(length, a.len())` elements are copied from `a`;
/// any remaining positions hold `T::default()`.
///
/// # Panics
///
/// Panics if `capacity < length`.
#[must_use]
pub fn resize<T: Clone + Default>(a: &[T], length: usize, capacity: usize) -> Vec<T> {
    assert!(length <= capacity, "resize: length {length} exceeds capacity {capacity}");
    let mut b = Vec::with_capacity(capacity);
    b.extend_from_slice(&a[..length.min(a.len())]);
    b.resize(length, T::default());
    b
}

/// Exchanges `a[i]` and `a[j]` in place.
///
/// # Panics
///
/// Panics if `i` or `j` is out of bounds.
pub fn swap<T>(a: &mut [T], i: usize, j: usize) {
    a.swap(i, j);
}
