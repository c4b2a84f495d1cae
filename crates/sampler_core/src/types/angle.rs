//! Angular magnitude type.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{Add, Neg, Sub};

/// Angular magnitude stored as radians.
///
/// `Angle` is a thin wrapper around `f64` radians. It is unbounded: values
/// outside `[0, 2π)` are legal and meaningful (an angle of `3π` is one and a
/// half turns, not half a turn), and the samplers never normalise their
/// output. Callers wanting a canonical representative can use
/// [`Angle::normalised`].
///
/// # Examples
///
/// ```
/// use sampler_core::types::Angle;
///
/// let quarter = Angle::from_degrees(90.0);
/// assert!((quarter.radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
///
/// let sum = quarter + quarter;
/// assert!((sum.degrees() - 180.0).abs() < 1e-9);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Angle(f64);

impl Angle {
    /// The zero angle.
    pub const ZERO: Angle = Angle(0.0);

    /// One full turn, `2π` radians.
    pub const FULL_TURN: Angle = Angle(TAU);

    /// Creates an angle from radians.
    #[inline]
    pub const fn from_radians(radians: f64) -> Self {
        Angle(radians)
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(degrees: f64) -> Self {
        Angle(degrees.to_radians())
    }

    /// Creates an angle from a number of full turns (1.0 turn = `2π`).
    #[inline]
    pub fn from_turns(turns: f64) -> Self {
        Angle(turns * TAU)
    }

    /// Returns the magnitude in radians.
    #[inline]
    pub const fn radians(self) -> f64 {
        self.0
    }

    /// Returns the magnitude in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Returns the canonical representative in `[0, 2π)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sampler_core::types::Angle;
    ///
    /// let wrapped = Angle::from_turns(1.25).normalised();
    /// assert!((wrapped.degrees() - 90.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn normalised(self) -> Self {
        Angle(self.0.rem_euclid(TAU))
    }
}

impl Add for Angle {
    type Output = Angle;

    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl Sub for Angle {
    type Output = Angle;

    #[inline]
    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}

impl Neg for Angle {
    type Output = Angle;

    #[inline]
    fn neg(self) -> Angle {
        Angle(-self.0)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.0)
    }
}
