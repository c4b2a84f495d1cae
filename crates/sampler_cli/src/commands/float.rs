//! Float draw command.

use sampler_core::sample::ranged_float;
use tracing::{debug, warn};

use crate::Result;

/// Draws `count` floats from `[min, max]` and prints one per line.
///
/// Inverted bounds are passed straight to the sampler, which extrapolates
/// rather than swapping; a warning is logged so the sharp edge is visible.
pub fn run(seed: Option<u64>, min: f64, max: f64, count: usize) -> Result<()> {
    if max < min {
        warn!(min, max, "inverted bounds: results extrapolate outside the range");
    }

    let mut source = super::make_source(seed);
    debug!(min, max, count, "drawing floats");

    for _ in 0..count {
        println!("{}", ranged_float(&mut source, min, max));
    }
    Ok(())
}
