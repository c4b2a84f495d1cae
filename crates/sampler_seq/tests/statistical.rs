//! Statistical integration tests for the sequence engines.
//!
//! Fixed-seed batches with tolerances of several standard deviations, so
//! results are deterministic in CI and robust to seed changes.

use std::collections::HashMap;

use sampler_core::source::SeededSource;
use sampler_seq::{sample_distinct, sample_with_replacement, shuffle};

/// Every permutation of a three-element sequence appears with near-equal
/// frequency.
#[test]
fn test_shuffle_permutation_frequencies() {
    const TRIALS: usize = 60_000;
    let mut source = SeededSource::from_seed(271);
    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();

    for _ in 0..TRIALS {
        let mut items = [1u8, 2, 3];
        shuffle(&mut source, items.as_mut_slice());
        *counts.entry(items).or_insert(0) += 1;
    }

    assert_eq!(counts.len(), 6, "not all permutations reached: {:?}", counts);

    // Expected 10_000 per permutation, sigma is about 91; allow 5 sigma
    // several times over
    let expected = TRIALS / 6;
    for (permutation, &count) in &counts {
        assert!(
            count.abs_diff(expected) < expected / 10,
            "permutation {:?} seen {} times, expected about {}",
            permutation,
            count,
            expected
        );
    }
}

/// Distinct selection is uniform over elements: each member of the
/// population is chosen equally often.
#[test]
fn test_distinct_selection_is_uniform_over_elements() {
    const TRIALS: usize = 30_000;
    const POPULATION: usize = 10;
    const COUNT: usize = 3;

    let mut source = SeededSource::from_seed(314);
    let pool: Vec<usize> = (0..POPULATION).collect();
    let mut chosen_counts = [0usize; POPULATION];

    for _ in 0..TRIALS {
        for pick in sample_distinct(&mut source, &pool, COUNT) {
            chosen_counts[pick] += 1;
        }
    }

    // Each element is chosen with probability 3/10 per trial
    let expected = TRIALS * COUNT / POPULATION;
    for (element, &count) in chosen_counts.iter().enumerate() {
        assert!(
            count.abs_diff(expected) < expected / 10,
            "element {} chosen {} times, expected about {}",
            element,
            count,
            expected
        );
    }
}

/// Replacement draws are independent: duplicates appear at the expected
/// rate once the count passes the population size.
#[test]
fn test_with_replacement_duplicate_rate() {
    const TRIALS: usize = 10_000;
    let mut source = SeededSource::from_seed(17);
    let pool: Vec<u8> = (0..10).collect();

    let mut trials_with_duplicates = 0usize;
    for _ in 0..TRIALS {
        let picks = sample_with_replacement(&mut source, &pool, 10);
        let mut sorted = picks.clone();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() < 10 {
            trials_with_duplicates += 1;
        }
    }

    // P(no duplicate in 10 draws from 10) = 10!/10^10, under 0.04%
    let duplicate_fraction = trials_with_duplicates as f64 / TRIALS as f64;
    assert!(
        duplicate_fraction > 0.99,
        "duplicate fraction {} is implausibly low for independent draws",
        duplicate_fraction
    );
}

/// Each position of a shuffled sequence is equally likely to hold each
/// element.
#[test]
fn test_shuffle_positional_uniformity() {
    const TRIALS: usize = 40_000;
    const LEN: usize = 4;

    let mut source = SeededSource::from_seed(88);
    let mut placement = [[0usize; LEN]; LEN];

    for _ in 0..TRIALS {
        let mut items = [0usize, 1, 2, 3];
        shuffle(&mut source, items.as_mut_slice());
        for (position, &element) in items.iter().enumerate() {
            placement[element][position] += 1;
        }
    }

    let expected = TRIALS / LEN;
    for (element, row) in placement.iter().enumerate() {
        for (position, &count) in row.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < expected / 10,
                "element {} at position {} seen {} times, expected about {}",
                element,
                position,
                count,
                expected
            );
        }
    }
}

/// The whole engine stack replays exactly under a fixed seed.
#[test]
fn test_engine_stack_determinism() {
    let run = |seed: u64| -> (Vec<u32>, Vec<u32>, Vec<u32>) {
        let mut source = SeededSource::from_seed(seed);
        let mut deck: Vec<u32> = (0..52).collect();
        shuffle(&mut source, &mut deck);
        let hand = sample_distinct(&mut source, &deck, 5);
        let draws = sample_with_replacement(&mut source, &deck, 5);
        (deck, hand, draws)
    };

    assert_eq!(run(2024), run(2024));
    assert_ne!(run(2024), run(2025));
}
