//! # Range Samplers
//!
//! Pure functions mapping raw uniform draws plus bounds into values of a
//! target type. Every function takes the source by mutable reference and
//! returns after a bounded number of draws; nothing here owns a source,
//! allocates, or fails recoverably.
//!
//! ## Sampler Families
//!
//! - [`range`]: scalar numeric draws (`uniform_f64`, `ranged_float`,
//!   `ranged_i64`, `ranged_usize`, `ranged_byte`, `byte_up_to`)
//! - [`temporal`]: duration draws over [`chrono::TimeDelta`]
//! - [`angular`]: angle draws over [`Angle`](crate::types::Angle)
//! - [`vector`]: planar draws over [`Vec2`](crate::types::Vec2)
//!
//! ## Bound Semantics
//!
//! Integer ranges are half-open (`[min, max)`) and unbiased; the empty range
//! `min == max` is a documented degenerate case returning `min`. Floating,
//! duration, and angular ranges use the linear formula
//! `uniform * (max - min) + min` with inclusive intent, and deliberately do
//! not guard inverted bounds: `max < min` extrapolates (see
//! [`range::ranged_float`]). That asymmetry is part of the contract, not an
//! oversight; each function's documentation states which rule it follows.

pub mod angular;
pub mod range;
pub mod temporal;
pub mod vector;

pub use angular::{next_angle, ranged_angle};
pub use range::{byte_up_to, ranged_byte, ranged_float, ranged_i64, ranged_usize, uniform_f64};
pub use temporal::{duration_up_to, ranged_duration};
pub use vector::{vector_by_magnitude, vector_in_box, vector_in_symmetric_box};
