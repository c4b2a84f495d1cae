//! Minimal planar vector type.

use std::ops::{Add, Mul, Sub};

use super::Angle;

/// Two-component vector with `f64` coordinates.
///
/// `Vec2` exists so the planar samplers can express their formulas (rotate a
/// unit-axis vector, combine per-axis draws). It deliberately stops at the
/// arithmetic those formulas need; it is not a general linear-algebra type.
///
/// # Examples
///
/// ```
/// use sampler_core::types::{Angle, Vec2};
///
/// let east = Vec2::new(2.0, 0.0);
/// let north = east.rotated(Angle::from_degrees(90.0));
/// assert!(north.x.abs() < 1e-12);
/// assert!((north.y - 2.0).abs() < 1e-12);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f64,
    /// Vertical component.
    pub y: f64,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Returns the Euclidean length.
    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the direction as an angle in `(-π, π]`, measured
    /// anticlockwise from the positive x axis.
    #[inline]
    pub fn angle(self) -> Angle {
        Angle::from_radians(self.y.atan2(self.x))
    }

    /// Returns this vector rotated anticlockwise by `angle`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sampler_core::types::{Angle, Vec2};
    ///
    /// let v = Vec2::new(1.0, 0.0).rotated(Angle::from_degrees(180.0));
    /// assert!((v.x + 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn rotated(self, angle: Angle) -> Vec2 {
        let (sin, cos) = angle.radians().sin_cos();
        Vec2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    #[inline]
    fn mul(self, scale: f64) -> Vec2 {
        Vec2::new(self.x * scale, self.y * scale)
    }
}
