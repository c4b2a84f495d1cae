//! Raw byte emission command.

use std::io::{self, Write};

use sampler_core::source::UniformSource;
use tracing::debug;

use crate::Result;

/// Emits `count` random bytes: raw to stdout, or lowercase hex with `--hex`.
pub fn run(seed: Option<u64>, count: usize, hex: bool) -> Result<()> {
    let mut source = super::make_source(seed);
    debug!(count, hex, "emitting bytes");

    let mut buffer = vec![0u8; count];
    source.fill_bytes(&mut buffer);

    let mut stdout = io::stdout().lock();
    if hex {
        let encoded = hex_string(&buffer);
        stdout.write_all(encoded.as_bytes())?;
        stdout.write_all(b"\n")?;
    } else {
        stdout.write_all(&buffer)?;
    }
    Ok(())
}

/// Lowercase hex rendering of a byte slice.
fn hex_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push_str(&format!("{:02x}", byte));
    }
    out
}
