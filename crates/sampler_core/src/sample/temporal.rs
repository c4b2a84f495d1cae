//! Duration range samplers.

use chrono::TimeDelta;

use crate::source::UniformSource;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Converts a delta to fractional seconds.
///
/// Total for every representable `TimeDelta`; precision beyond the `f64`
/// mantissa (relevant only for deltas longer than a few months measured to
/// the nanosecond) is rounded.
#[inline]
fn delta_seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / NANOS_PER_SEC
}

/// Converts fractional seconds back to a delta, saturating at the
/// representable range.
fn delta_from_seconds(seconds: f64) -> TimeDelta {
    let floor = delta_seconds(TimeDelta::MIN);
    let ceiling = delta_seconds(TimeDelta::MAX);
    let clamped = seconds.clamp(floor, ceiling);

    let whole = clamped.floor();
    let nanos = ((clamped - whole) * NANOS_PER_SEC).round() as u32;
    TimeDelta::new(whole as i64, nanos).unwrap_or(if clamped > 0.0 {
        TimeDelta::MAX
    } else {
        TimeDelta::MIN
    })
}

/// Draws a uniform duration with inclusive intent over `[min, max]`.
///
/// Same linear formula as
/// [`ranged_float`](crate::sample::ranged_float), applied to the duration's
/// magnitude in fractional seconds, so the inverted-bound rule carries over
/// unchanged: `max < min` extrapolates rather than swapping or failing, and
/// negative results are representable because [`TimeDelta`] is signed.
///
/// Results are resolved to the nanosecond and saturate at
/// [`TimeDelta::MIN`]/[`TimeDelta::MAX`] when extrapolation leaves the
/// representable range.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use sampler_core::sample::ranged_duration;
/// use sampler_core::source::SeededSource;
///
/// let mut source = SeededSource::from_seed(42);
/// let min = TimeDelta::seconds(10);
/// let max = TimeDelta::seconds(20);
///
/// for _ in 0..1_000 {
///     let delta = ranged_duration(&mut source, min, max);
///     assert!(delta >= min && delta <= max);
/// }
/// ```
pub fn ranged_duration<S: UniformSource + ?Sized>(
    source: &mut S,
    min: TimeDelta,
    max: TimeDelta,
) -> TimeDelta {
    let uniform = source.next_f64();
    let lower = delta_seconds(min);
    let upper = delta_seconds(max);
    delta_from_seconds(uniform * (upper - lower) + lower)
}

/// Draws a uniform duration over `[zero, max]`.
///
/// Convenience form of [`ranged_duration`] with the lower bound defaulted
/// to the zero delta.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use sampler_core::sample::duration_up_to;
/// use sampler_core::source::SeededSource;
///
/// let mut source = SeededSource::from_seed(42);
/// let delta = duration_up_to(&mut source, TimeDelta::minutes(5));
/// assert!(delta >= TimeDelta::zero());
/// assert!(delta <= TimeDelta::minutes(5));
/// ```
#[inline]
pub fn duration_up_to<S: UniformSource + ?Sized>(source: &mut S, max: TimeDelta) -> TimeDelta {
    ranged_duration(source, TimeDelta::zero(), max)
}
