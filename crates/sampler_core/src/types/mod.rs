//! Value types for angular and planar sampling.
//!
//! This module provides:
//! - `Angle`: a radian-backed angular magnitude
//! - `Vec2`: a minimal two-component vector
//!
//! Both types carry only the arithmetic the samplers need. They are not a
//! geometry library; callers with richer vector types can convert at the
//! boundary.

mod angle;
mod vector;

pub use angle::Angle;
pub use vector::Vec2;
