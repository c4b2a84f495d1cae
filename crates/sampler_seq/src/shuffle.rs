//! In-place uniform permutation of indexable sequences.

use std::collections::VecDeque;

use sampler_core::sample::ranged_usize;
use sampler_core::source::UniformSource;

/// Capability required of a shuffleable sequence: a known length and
/// index-level swaps.
///
/// The permutation algorithm is implemented once against this trait;
/// concrete containers join through thin adapter impls. Slices, `Vec`, and
/// `VecDeque` are covered here, and the contract is identical for all of
/// them: only the underlying swap mechanism differs.
///
/// # Examples
///
/// A wrapper over parallel arrays can join the abstraction by swapping both
/// columns together:
///
/// ```
/// use sampler_seq::IndexedMut;
///
/// struct Columns {
///     keys: Vec<u32>,
///     labels: Vec<String>,
/// }
///
/// impl IndexedMut for Columns {
///     fn len(&self) -> usize {
///         self.keys.len()
///     }
///     fn swap_elements(&mut self, a: usize, b: usize) {
///         self.keys.swap(a, b);
///         self.labels.swap(a, b);
///     }
/// }
/// ```
pub trait IndexedMut {
    /// The number of elements.
    fn len(&self) -> usize;

    /// True when the length is zero.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Swaps the elements at positions `a` and `b`.
    fn swap_elements(&mut self, a: usize, b: usize);
}

impl<T> IndexedMut for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn swap_elements(&mut self, a: usize, b: usize) {
        self.swap(a, b);
    }
}

impl<T> IndexedMut for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn swap_elements(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> IndexedMut for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn swap_elements(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

/// Permutes the sequence in place, every permutation equally probable.
///
/// Fisher-Yates backward iteration: for each position `n` from `len - 1`
/// down to `1`, draw `k` uniform in `[0, n + 1)` and swap positions `k` and
/// `n`. Performs exactly `len - 1` swaps, zero for sequences of length 0 or
/// 1, and consumes exactly `len - 1` index draws, so transcripts are
/// reproducible under a fixed seed.
///
/// # Examples
///
/// ```
/// use sampler_core::source::SeededSource;
/// use sampler_seq::shuffle;
///
/// let mut source = SeededSource::from_seed(42);
/// let mut items = vec!["a", "b", "c", "d", "e"];
/// shuffle(&mut source, &mut items);
///
/// let mut restored = items.clone();
/// restored.sort_unstable();
/// assert_eq!(restored, vec!["a", "b", "c", "d", "e"]);
/// ```
pub fn shuffle<S, C>(source: &mut S, sequence: &mut C)
where
    S: UniformSource + ?Sized,
    C: IndexedMut + ?Sized,
{
    for n in (1..sequence.len()).rev() {
        let k = ranged_usize(source, 0, n + 1);
        sequence.swap_elements(k, n);
    }
}

/// Runs the backward permutation for `count` steps, so the trailing
/// `min(count, len)` positions hold a uniformly chosen distinct selection.
///
/// This is the reservoir primitive behind
/// [`sample_distinct`](crate::select::sample_distinct): after the call, the
/// last `min(count, len)` elements are a uniform draw of that many distinct
/// elements, in uniform order, and the leading elements are the not-chosen
/// remainder (partially disturbed). Returns the number of trailing
/// positions materialised.
///
/// `count >= len` degrades to a full [`shuffle`].
///
/// # Examples
///
/// ```
/// use sampler_core::source::SeededSource;
/// use sampler_seq::partial_shuffle;
///
/// let mut source = SeededSource::from_seed(42);
/// let mut items: Vec<u32> = (0..100).collect();
///
/// let taken = partial_shuffle(&mut source, &mut items, 3);
/// assert_eq!(taken, 3);
/// let chosen = &items[97..];
/// assert!(chosen.iter().all(|&v| v < 100));
/// ```
pub fn partial_shuffle<S, C>(source: &mut S, sequence: &mut C, count: usize) -> usize
where
    S: UniformSource + ?Sized,
    C: IndexedMut + ?Sized,
{
    let len = sequence.len();
    let take = count.min(len);
    // Position 0 needs no draw: k in [0, 1) is always 0
    let stop = (len - take).max(1);
    for n in (stop..len).rev() {
        let k = ranged_usize(source, 0, n + 1);
        sequence.swap_elements(k, n);
    }
    take
}
