//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Shared helpers for
//! seed handling and line input live here.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use sampler_core::source::SeededSource;
use tracing::info;

use crate::Result;

pub mod bytes;
pub mod float;
pub mod int;
pub mod pick;
pub mod shuffle;

/// Builds the source for a command, logging entropy-drawn seeds so the run
/// can be replayed with `--seed`.
pub fn make_source(seed: Option<u64>) -> SeededSource {
    match seed {
        Some(seed) => SeededSource::from_seed(seed),
        None => {
            let source = SeededSource::from_entropy();
            info!(seed = source.seed(), "seeded from OS entropy");
            source
        }
    }
}

/// Reads input lines from a file, or stdin when no path is given.
pub fn read_lines(path: Option<&str>) -> Result<Vec<String>> {
    let lines = match path {
        Some(path) => BufReader::new(File::open(path)?)
            .lines()
            .collect::<io::Result<Vec<String>>>()?,
        None => io::stdin()
            .lock()
            .lines()
            .collect::<io::Result<Vec<String>>>()?,
    };
    Ok(lines)
}
