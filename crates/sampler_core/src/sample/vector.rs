//! Planar vector samplers derived from the scalar ones.

use crate::sample::{next_angle, ranged_float};
use crate::source::UniformSource;
use crate::types::Vec2;

/// Draws a vector with uniform direction and uniform magnitude in
/// `[min_magnitude, max_magnitude]`.
///
/// Two draws: an angle uniform over the full turn, then a magnitude via
/// [`ranged_float`]; the result is the unit-axis vector `(magnitude, 0)`
/// rotated by the angle.
///
/// # Distribution
///
/// This is NOT uniform over disk area. Magnitudes are uniform along the
/// radius, so samples are sparser near the centre than an area-uniform disk
/// sample (which would draw the radius sqrt-scaled). That radial profile is
/// the intended contract; callers wanting area uniformity should transform
/// the magnitude themselves.
///
/// # Examples
///
/// ```
/// use sampler_core::sample::vector_by_magnitude;
/// use sampler_core::source::SeededSource;
///
/// let mut source = SeededSource::from_seed(42);
/// for _ in 0..1_000 {
///     let v = vector_by_magnitude(&mut source, 0.5, 2.0);
///     let len = v.length();
///     assert!(len >= 0.5 - 1e-9 && len <= 2.0 + 1e-9);
/// }
/// ```
pub fn vector_by_magnitude<S: UniformSource + ?Sized>(
    source: &mut S,
    min_magnitude: f64,
    max_magnitude: f64,
) -> Vec2 {
    let angle = next_angle(source);
    let magnitude = ranged_float(source, min_magnitude, max_magnitude);
    Vec2::new(magnitude, 0.0).rotated(angle)
}

/// Draws a vector uniform over the axis-aligned box
/// `[min_x, max_x] × [min_y, max_y]`.
///
/// One independent [`ranged_float`] draw per axis; unlike
/// [`vector_by_magnitude`], this distribution IS uniform over the box area.
///
/// # Examples
///
/// ```
/// use sampler_core::sample::vector_in_box;
/// use sampler_core::source::SeededSource;
///
/// let mut source = SeededSource::from_seed(42);
/// let v = vector_in_box(&mut source, -1.0, 0.0, 1.0, 2.0);
/// assert!(v.x >= -1.0 && v.x <= 1.0);
/// assert!(v.y >= 0.0 && v.y <= 2.0);
/// ```
pub fn vector_in_box<S: UniformSource + ?Sized>(
    source: &mut S,
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
) -> Vec2 {
    let x = ranged_float(source, min_x, max_x);
    let y = ranged_float(source, min_y, max_y);
    Vec2::new(x, y)
}

/// Draws a vector uniform over the origin-centred box
/// `[-half_x, half_x] × [-half_y, half_y]`.
#[inline]
pub fn vector_in_symmetric_box<S: UniformSource + ?Sized>(
    source: &mut S,
    half_x: f64,
    half_y: f64,
) -> Vec2 {
    vector_in_box(source, -half_x, -half_y, half_x, half_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SeededSource;
    use std::f64::consts::TAU;

    #[test]
    fn test_vector_by_magnitude_length_bounds() {
        let mut source = SeededSource::from_seed(42);
        for _ in 0..10_000 {
            let v = vector_by_magnitude(&mut source, 1.0, 3.0);
            let len = v.length();
            assert!(
                (1.0 - 1e-9..=3.0 + 1e-9).contains(&len),
                "length {} out of bounds",
                len
            );
        }
    }

    #[test]
    fn test_vector_by_magnitude_direction_coverage() {
        let mut source = SeededSource::from_seed(42);
        let mut quadrants = [false; 4];

        for _ in 0..1_000 {
            let v = vector_by_magnitude(&mut source, 1.0, 1.0);
            let theta = v.angle().radians().rem_euclid(TAU);
            quadrants[(theta / TAU * 4.0) as usize] = true;
        }
        assert!(quadrants.iter().all(|&hit| hit), "quadrant never drawn");
    }

    #[test]
    fn test_vector_in_box_bounds() {
        let mut source = SeededSource::from_seed(42);
        for _ in 0..10_000 {
            let v = vector_in_box(&mut source, -2.0, 1.0, 5.0, 1.5);
            assert!(v.x >= -2.0 && v.x <= 5.0, "x {} out of bounds", v.x);
            assert!(v.y >= 1.0 && v.y <= 1.5, "y {} out of bounds", v.y);
        }
    }

    #[test]
    fn test_symmetric_box_is_centred() {
        let mut source = SeededSource::from_seed(42);
        for _ in 0..10_000 {
            let v = vector_in_symmetric_box(&mut source, 3.0, 0.5);
            assert!(v.x.abs() <= 3.0);
            assert!(v.y.abs() <= 0.5);
        }
    }

    #[test]
    fn test_degenerate_box_is_a_point() {
        let mut source = SeededSource::from_seed(42);
        let v = vector_in_box(&mut source, 2.0, -1.0, 2.0, -1.0);
        assert_eq!(v, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_determinism() {
        let draws = |seed: u64| -> Vec<Vec2> {
            let mut source = SeededSource::from_seed(seed);
            (0..32)
                .map(|_| vector_by_magnitude(&mut source, 0.0, 1.0))
                .collect()
        };
        assert_eq!(draws(3), draws(3));
    }
}
