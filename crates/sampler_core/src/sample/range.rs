//! Scalar numeric range samplers.

use num_traits::Float;

use crate::source::UniformSource;

/// Draws a uniform `f64` in the half-open interval `[0, 1)`.
///
/// One raw draw, deterministic given the source's current state. Equivalent
/// to [`UniformSource::next_f64`]; exists so call sites that otherwise use
/// only free functions do not need the trait in scope.
///
/// # Examples
///
/// ```
/// use sampler_core::sample::uniform_f64;
/// use sampler_core::source::SeededSource;
///
/// let mut source = SeededSource::from_seed(42);
/// let value = uniform_f64(&mut source);
/// assert!(value >= 0.0 && value < 1.0);
/// ```
#[inline]
pub fn uniform_f64<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    source.next_f64()
}

/// Draws a uniform floating value with inclusive intent over `[min, max]`.
///
/// # Formula
/// ```text
/// ranged_float(min, max) = uniform * (max - min) + min
/// ```
/// where `uniform` is drawn from `[0, 1)`. Floating rounding may make the
/// upper bound unreachable in practice.
///
/// # Inverted Bounds
///
/// `max < min` is NOT guarded: the formula extrapolates linearly, so the
/// result lands outside the natural order of `[max, min]`. Callers get
/// exactly what the algebra yields. This is a documented sharp edge kept
/// for formula transparency; swap the arguments if you want the ordered
/// interval.
///
/// # Examples
///
/// ```
/// use sampler_core::sample::ranged_float;
/// use sampler_core::source::SeededSource;
///
/// let mut source = SeededSource::from_seed(42);
/// for _ in 0..1_000 {
///     let value = ranged_float(&mut source, -2.5_f64, 4.0);
///     assert!(value >= -2.5 && value <= 4.0);
/// }
///
/// // Degenerate range collapses to the single point
/// assert_eq!(ranged_float(&mut source, 3.0_f64, 3.0), 3.0);
/// ```
#[inline]
pub fn ranged_float<T: Float, S: UniformSource + ?Sized>(source: &mut S, min: T, max: T) -> T {
    let uniform = T::from(source.next_f64()).unwrap();
    uniform * (max - min) + min
}

/// Draws a uniform `u64` below `bound` without modulo bias.
///
/// Widening multiply maps one raw draw onto `[0, bound)`; draws falling in
/// the short leading zone that would over-represent small values are
/// rejected and retried. Expected retries are below one for any bound.
///
/// `bound` must be non-zero; callers guard the degenerate empty range.
#[inline]
fn bounded_u64<S: UniformSource + ?Sized>(source: &mut S, bound: u64) -> u64 {
    let mut product = u128::from(source.next_u64()) * u128::from(bound);
    let mut low = product as u64;
    if low < bound {
        // Rejection threshold: 2^64 mod bound
        let threshold = bound.wrapping_neg() % bound;
        while low < threshold {
            product = u128::from(source.next_u64()) * u128::from(bound);
            low = product as u64;
        }
    }
    (product >> 64) as u64
}

/// Draws a uniform integer from the half-open range `[min, max)`.
///
/// Unbiased for every span: the draw is mapped by widening multiply with
/// rejection rather than by modulo, so no value is over-represented when the
/// span does not divide the generator's output range.
///
/// # Degenerate Range
///
/// `min == max` denotes the empty half-open range; the call returns `min`
/// without consuming a draw.
///
/// # Panics
///
/// Panics if `max < min`.
///
/// # Examples
///
/// ```
/// use sampler_core::sample::ranged_i64;
/// use sampler_core::source::SeededSource;
///
/// let mut source = SeededSource::from_seed(42);
/// for _ in 0..1_000 {
///     let value = ranged_i64(&mut source, -3, 3);
///     assert!(value >= -3 && value < 3);
/// }
///
/// assert_eq!(ranged_i64(&mut source, 5, 5), 5);
/// ```
#[inline]
pub fn ranged_i64<S: UniformSource + ?Sized>(source: &mut S, min: i64, max: i64) -> i64 {
    assert!(
        min <= max,
        "integer range inverted: min {} exceeds max {}",
        min,
        max
    );
    // Two's complement span is exact even when max - min overflows i64
    let span = max.wrapping_sub(min) as u64;
    if span == 0 {
        return min;
    }
    min.wrapping_add(bounded_u64(source, span) as i64)
}

/// Draws a uniform index from the half-open range `[min, max)`.
///
/// Same contract as [`ranged_i64`], over the index domain. The sequence
/// engines use this for swap positions.
///
/// # Panics
///
/// Panics if `max < min`.
#[inline]
pub fn ranged_usize<S: UniformSource + ?Sized>(source: &mut S, min: usize, max: usize) -> usize {
    assert!(
        min <= max,
        "index range inverted: min {} exceeds max {}",
        min,
        max
    );
    let span = (max - min) as u64;
    if span == 0 {
        return min;
    }
    min + bounded_u64(source, span) as usize
}

/// Draws a uniform byte from the half-open range `[min, max)`.
///
/// Narrows through the integer sampler, so the same unbiasedness and
/// degenerate-range rules apply.
///
/// # Panics
///
/// Panics if `max < min`.
#[inline]
pub fn ranged_byte<S: UniformSource + ?Sized>(source: &mut S, min: u8, max: u8) -> u8 {
    ranged_i64(source, i64::from(min), i64::from(max)) as u8
}

/// Draws a uniform byte from `[0, max)`.
///
/// Convenience form of [`ranged_byte`] with the lower bound defaulted to
/// zero.
#[inline]
pub fn byte_up_to<S: UniformSource + ?Sized>(source: &mut S, max: u8) -> u8 {
    ranged_byte(source, 0, max)
}
