//! Angle range samplers.

use crate::source::UniformSource;
use crate::types::Angle;

/// Draws a uniform angle with inclusive intent over `[min, max]`.
///
/// Same linear formula as
/// [`ranged_float`](crate::sample::ranged_float), applied to the angular
/// magnitude in radians; the inverted-bound rule carries over unchanged
/// (`max < min` extrapolates). No normalisation is applied: bounds spanning
/// more than a full turn yield angles spanning more than a full turn.
///
/// # Examples
///
/// ```
/// use sampler_core::sample::ranged_angle;
/// use sampler_core::source::SeededSource;
/// use sampler_core::types::Angle;
///
/// let mut source = SeededSource::from_seed(42);
/// let angle = ranged_angle(
///     &mut source,
///     Angle::from_degrees(45.0),
///     Angle::from_degrees(90.0),
/// );
/// assert!(angle.degrees() >= 45.0 && angle.degrees() <= 90.0);
/// ```
#[inline]
pub fn ranged_angle<S: UniformSource + ?Sized>(source: &mut S, min: Angle, max: Angle) -> Angle {
    let uniform = source.next_f64();
    Angle::from_radians(uniform * (max.radians() - min.radians()) + min.radians())
}

/// Draws a uniform angle over a full turn, `[0, 2π)`.
///
/// # Examples
///
/// ```
/// use sampler_core::sample::next_angle;
/// use sampler_core::source::SeededSource;
///
/// let mut source = SeededSource::from_seed(42);
/// let angle = next_angle(&mut source);
/// assert!(angle.radians() >= 0.0);
/// assert!(angle.radians() < std::f64::consts::TAU);
/// ```
#[inline]
pub fn next_angle<S: UniformSource + ?Sized>(source: &mut S) -> Angle {
    ranged_angle(source, Angle::ZERO, Angle::FULL_TURN)
}
