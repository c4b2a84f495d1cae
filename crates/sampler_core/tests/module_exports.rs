//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that the source module is accessible via absolute path.
#[test]
fn test_source_module_exports() {
    use sampler_core::source::SeededSource;
    use sampler_core::source::UniformSource;

    let mut source = SeededSource::from_seed(42);
    assert_eq!(source.seed(), 42);

    let _ = source.next_u32();
    let _ = source.next_u64();
    let _ = source.next_f64();

    let mut buffer = [0u8; 16];
    source.fill_bytes(&mut buffer);

    // The trait is object-safe; engines can hold it behind a reference
    fn draws_one(source: &mut dyn UniformSource) -> u64 {
        source.next_u64()
    }
    let _ = draws_one(&mut source);
}

/// Test that the scalar samplers are accessible via absolute path.
#[test]
fn test_sample_module_exports() {
    use sampler_core::sample::byte_up_to;
    use sampler_core::sample::ranged_byte;
    use sampler_core::sample::ranged_float;
    use sampler_core::sample::ranged_i64;
    use sampler_core::sample::ranged_usize;
    use sampler_core::sample::uniform_f64;
    use sampler_core::source::SeededSource;

    let mut source = SeededSource::from_seed(42);

    let _ = uniform_f64(&mut source);
    let _ = ranged_float(&mut source, 0.0_f64, 1.0);
    let _ = ranged_float(&mut source, 0.0_f32, 1.0);
    let _ = ranged_i64(&mut source, -5, 5);
    let _ = ranged_usize(&mut source, 0, 10);
    let _ = ranged_byte(&mut source, 1, 9);
    let _ = byte_up_to(&mut source, 9);
}

/// Test that the temporal, angular, and vector samplers are accessible.
#[test]
fn test_derived_sampler_exports() {
    use chrono::TimeDelta;
    use sampler_core::sample::duration_up_to;
    use sampler_core::sample::next_angle;
    use sampler_core::sample::ranged_angle;
    use sampler_core::sample::ranged_duration;
    use sampler_core::sample::vector_by_magnitude;
    use sampler_core::sample::vector_in_box;
    use sampler_core::sample::vector_in_symmetric_box;
    use sampler_core::source::SeededSource;
    use sampler_core::types::{Angle, Vec2};

    let mut source = SeededSource::from_seed(42);

    let _ = ranged_duration(&mut source, TimeDelta::zero(), TimeDelta::seconds(1));
    let _ = duration_up_to(&mut source, TimeDelta::seconds(1));
    let _ = ranged_angle(&mut source, Angle::ZERO, Angle::FULL_TURN);
    let _ = next_angle(&mut source);

    let by_magnitude: Vec2 = vector_by_magnitude(&mut source, 0.0, 1.0);
    let _ = by_magnitude.length();
    let _ = vector_in_box(&mut source, -1.0, -1.0, 1.0, 1.0);
    let _ = vector_in_symmetric_box(&mut source, 1.0, 1.0);
}
