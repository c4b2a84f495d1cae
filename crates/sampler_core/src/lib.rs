//! # sampler_core: Uniform Source and Range Samplers
//!
//! ## Foundation Layer Role
//!
//! sampler_core is the bottom layer of the sampling toolkit, providing:
//! - The uniform entropy capability trait (`source::UniformSource`)
//! - A seeded default source backed by `rand` (`source::SeededSource`)
//! - Range samplers over numeric, temporal, and angular domains (`sample`)
//! - Minimal angle and vector value types (`types`)
//!
//! The sequence engines (shuffling, fixed-size selection) live one layer up
//! in `sampler_seq` and consume this crate through the same two seams every
//! caller uses: the `UniformSource` trait and the free sampling functions.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: sources are seeded and reseedable, so any sequence
//!   of draws can be replayed exactly for debugging and testing.
//! - **Minimal required capability**: `UniformSource` requires only raw
//!   integer draws and reseeding; floating draws and byte fills are derived
//!   default methods, so an implementation is two primitives away from the
//!   full sampler surface.
//! - **Free functions over methods**: samplers borrow the source mutably for
//!   the duration of a single call and never take ownership of it, so any
//!   generator can be used without subclassing or wrapping.
//! - **No internal synchronisation**: the source is the only mutable state,
//!   and callers sharing one across threads must serialise access
//!   themselves. Every operation completes in bounded time.
//!
//! ## British English Convention
//!
//! All documentation uses British English spelling conventions
//! (e.g., "initialise", "behaviour", "serialisation").
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::sample::{next_angle, ranged_float, ranged_i64};
//! use sampler_core::source::SeededSource;
//!
//! let mut source = SeededSource::from_seed(42);
//!
//! // Scalar draws
//! let x = ranged_float(&mut source, -1.0, 1.0);
//! assert!((-1.0..=1.0).contains(&x));
//!
//! let n = ranged_i64(&mut source, 0, 6);
//! assert!((0..6).contains(&n));
//!
//! // A uniform direction over the full turn
//! let theta = next_angle(&mut source);
//! assert!(theta.radians() < std::f64::consts::TAU);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialisation for `Angle` and `Vec2`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod sample;
pub mod source;
pub mod types;
