//! # sampler_seq: Sequence Engines
//!
//! ## Engine Layer Role
//!
//! sampler_seq sits one layer above `sampler_core` and provides the two
//! sequence operations of the toolkit:
//! - In-place uniform permutation of indexable sequences (`shuffle`)
//! - Fixed-size sampling from a population, with and without repetition
//!   (`select`)
//!
//! Both engines obtain indices exclusively through
//! [`sampler_core::sample::ranged_usize`], so their uniformity reduces to
//! the unbiasedness of that single primitive.
//!
//! ## Sequence Abstraction
//!
//! The permutation algorithm is written once against [`IndexedMut`], a
//! minimal "known length, swappable by index" capability, with adapter
//! implementations for slices, vectors, and deques. Containers outside that
//! set only need those two methods to join.
//!
//! ## Destructive Mutation
//!
//! Shuffling mutates the caller's sequence in place. Callers needing the
//! original order must clone before calling; the selection engine already
//! works on its own storage and leaves the population untouched.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::source::SeededSource;
//! use sampler_seq::{sample_distinct, shuffle};
//!
//! let mut source = SeededSource::from_seed(42);
//!
//! let mut deck: Vec<u32> = (0..52).collect();
//! shuffle(&mut source, &mut deck);
//!
//! let hand = sample_distinct(&mut source, &deck, 5);
//! assert_eq!(hand.len(), 5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod select;
pub mod shuffle;

pub use select::{sample_distinct, sample_with_replacement};
pub use shuffle::{partial_shuffle, shuffle, IndexedMut};
