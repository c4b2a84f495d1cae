//! Integer draw command.

use sampler_core::sample::ranged_i64;
use tracing::debug;

use crate::{CliError, Result};

/// Draws `count` integers from `[min, max)` and prints one per line.
pub fn run(seed: Option<u64>, min: i64, max: i64, count: usize) -> Result<()> {
    if max < min {
        return Err(CliError::InvalidArgument {
            name: "--max",
            reason: format!("{} is below --min {}", max, min),
        });
    }

    let mut source = super::make_source(seed);
    debug!(min, max, count, "drawing integers");

    for _ in 0..count {
        println!("{}", ranged_i64(&mut source, min, max));
    }
    Ok(())
}
