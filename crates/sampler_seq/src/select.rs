//! Fixed-size sampling from a population.

use sampler_core::sample::ranged_usize;
use sampler_core::source::UniformSource;

use crate::shuffle::{partial_shuffle, shuffle};

/// Draws `count` elements with repetition allowed.
///
/// Each element is chosen by an independent index draw over the whole
/// population, so the same element may appear any number of times and draws
/// carry no memory of earlier ones. The result is freshly allocated and
/// never aliases the population's storage.
///
/// # Edge Cases
///
/// `count == 0` or an empty population yields an empty result; an empty
/// population consumes no draws regardless of `count`.
///
/// # Examples
///
/// ```
/// use sampler_core::source::SeededSource;
/// use sampler_seq::sample_with_replacement;
///
/// let mut source = SeededSource::from_seed(42);
/// let coins = ["heads", "tails"];
///
/// let flips = sample_with_replacement(&mut source, &coins, 10);
/// assert_eq!(flips.len(), 10);
/// ```
pub fn sample_with_replacement<T, S>(source: &mut S, population: &[T], count: usize) -> Vec<T>
where
    T: Clone,
    S: UniformSource + ?Sized,
{
    if population.is_empty() {
        return Vec::new();
    }
    let mut chosen = Vec::with_capacity(count);
    for _ in 0..count {
        let index = ranged_usize(source, 0, population.len());
        chosen.push(population[index].clone());
    }
    chosen
}

/// Draws `min(count, len)` distinct elements, uniformly and in uniform
/// order.
///
/// # Oversized Counts
///
/// `count >= population.len()` is not an error: the whole population is
/// cloned and shuffled, so the result is a uniform permutation of every
/// element. Asking for 5 of 3 returns all 3.
///
/// # Algorithm
///
/// For `count < len`, a partial Fisher-Yates runs over an index table and
/// the trailing `count` positions are cloned out. The draw transcript and
/// the distribution are exactly those of running the shuffle engine for
/// `count` steps from the end of a population copy and taking the trailing
/// elements; the index table just avoids cloning elements that are never
/// selected.
///
/// # Edge Cases
///
/// `count == 0` or an empty population yields an empty result.
///
/// # Examples
///
/// ```
/// use sampler_core::source::SeededSource;
/// use sampler_seq::sample_distinct;
///
/// let mut source = SeededSource::from_seed(42);
/// let pool: Vec<u32> = (1..=10).collect();
///
/// let picks = sample_distinct(&mut source, &pool, 3);
/// assert_eq!(picks.len(), 3);
///
/// // Oversized count returns a permutation of everything
/// let all = sample_distinct(&mut source, &pool, 99);
/// assert_eq!(all.len(), 10);
/// ```
pub fn sample_distinct<T, S>(source: &mut S, population: &[T], count: usize) -> Vec<T>
where
    T: Clone,
    S: UniformSource + ?Sized,
{
    if count == 0 || population.is_empty() {
        return Vec::new();
    }

    if population.len() <= count {
        let mut everything = population.to_vec();
        shuffle(source, &mut everything);
        return everything;
    }

    let mut indices: Vec<usize> = (0..population.len()).collect();
    let taken = partial_shuffle(source, &mut indices, count);
    indices[population.len() - taken..]
        .iter()
        .map(|&index| population[index].clone())
        .collect()
}
