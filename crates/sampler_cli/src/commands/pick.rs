//! Line selection command.

use sampler_seq::{sample_distinct, sample_with_replacement};
use tracing::debug;

use crate::Result;

/// Selects `count` lines from the input and prints them.
///
/// Without `--repeats` each line appears at most once; asking for more
/// lines than the input has yields every line in shuffled order. With
/// `--repeats` the draws are independent and exactly `count` lines are
/// printed (none for empty input).
pub fn run(seed: Option<u64>, count: usize, repeats: bool, file: Option<&str>) -> Result<()> {
    let lines = super::read_lines(file)?;
    let mut source = super::make_source(seed);
    debug!(lines = lines.len(), count, repeats, "selecting");

    let chosen = if repeats {
        sample_with_replacement(&mut source, &lines, count)
    } else {
        sample_distinct(&mut source, &lines, count)
    };
    for line in &chosen {
        println!("{}", line);
    }
    Ok(())
}
