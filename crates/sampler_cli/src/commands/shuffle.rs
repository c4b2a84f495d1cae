//! Line shuffle command.

use tracing::debug;

use crate::Result;

/// Shuffles the input lines and prints them.
pub fn run(seed: Option<u64>, file: Option<&str>) -> Result<()> {
    let mut lines = super::read_lines(file)?;
    let mut source = super::make_source(seed);
    debug!(lines = lines.len(), "shuffling");

    sampler_seq::shuffle(&mut source, &mut lines);
    for line in &lines {
        println!("{}", line);
    }
    Ok(())
}
