//! # Uniform Entropy Sources
//!
//! This module defines the capability seam between the sampling toolkit and
//! whatever provides raw randomness: the [`UniformSource`] trait, plus
//! [`SeededSource`], a seeded default implementation suitable for
//! reproducible runs.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: sources carry an explicit seed and can be reseeded
//!   at any point, restarting the draw sequence deterministically.
//! - **Minimal required capability**: implementors supply raw 32/64-bit
//!   draws and reseeding only; floating-point draws and byte fills are
//!   derived default methods built purely on those primitives.
//! - **Static dispatch by default**: every sampler is generic over the
//!   source, so the common path monomorphises; `&mut dyn UniformSource`
//!   still works where object safety is wanted.
//! - **Single-threaded**: a source is `&mut`-threaded through each call and
//!   carries no internal locking. One source per thread, or external
//!   serialisation, is the caller's job.
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::source::{SeededSource, UniformSource};
//!
//! // Create a seeded source for a reproducible run
//! let mut source = SeededSource::from_seed(12345);
//!
//! // Raw draws
//! let bits = source.next_u64();
//! let unit = source.next_f64();
//! assert!((0.0..1.0).contains(&unit));
//!
//! // Restart the sequence
//! source.reseed(12345);
//! assert_eq!(source.next_u64(), bits);
//! ```

mod seeded;
mod uniform;

// Public re-exports
pub use seeded::SeededSource;
pub use uniform::UniformSource;
