//! Sampler CLI - Command Line Operations for the Sampling Toolkit
//!
//! This is the operational entry point for the sampling library.
//!
//! # Commands
//!
//! - `sampler int --min M --max N` - Draw integers from a half-open range
//! - `sampler float --min A --max B` - Draw floats from a closed range
//! - `sampler shuffle [FILE]` - Shuffle input lines
//! - `sampler pick --count K [FILE]` - Select lines, with or without repeats
//! - `sampler bytes --count N` - Emit raw random bytes
//!
//! # Reproducibility
//!
//! Every command accepts `--seed`. Without it, a seed is drawn from OS
//! entropy and logged, so any run can be replayed afterwards. `RUST_LOG`
//! controls log verbosity.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Sampling toolkit CLI
#[derive(Parser)]
#[command(name = "sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed for reproducible output (default: drawn from OS entropy)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw integers from the half-open range [min, max)
    Int {
        /// Inclusive lower bound
        #[arg(long, default_value = "0")]
        min: i64,

        /// Exclusive upper bound
        #[arg(long)]
        max: i64,

        /// Number of draws
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Draw floats from the closed range [min, max]
    Float {
        /// Lower bound
        #[arg(long, default_value = "0.0")]
        min: f64,

        /// Upper bound
        #[arg(long, default_value = "1.0")]
        max: f64,

        /// Number of draws
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Shuffle input lines (stdin, or a file)
    Shuffle {
        /// Input file (defaults to stdin)
        file: Option<String>,
    },

    /// Select lines from the input (stdin, or a file)
    Pick {
        /// Number of lines to select
        #[arg(short, long)]
        count: usize,

        /// Allow the same line to be selected more than once
        #[arg(short, long)]
        repeats: bool,

        /// Input file (defaults to stdin)
        file: Option<String>,
    },

    /// Emit random bytes
    Bytes {
        /// Number of bytes
        #[arg(short, long)]
        count: usize,

        /// Print lowercase hex instead of raw bytes
        #[arg(long)]
        hex: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Int { min, max, count } => commands::int::run(cli.seed, min, max, count)?,
        Commands::Float { min, max, count } => commands::float::run(cli.seed, min, max, count)?,
        Commands::Shuffle { file } => commands::shuffle::run(cli.seed, file.as_deref())?,
        Commands::Pick {
            count,
            repeats,
            file,
        } => commands::pick::run(cli.seed, count, repeats, file.as_deref())?,
        Commands::Bytes { count, hex } => commands::bytes::run(cli.seed, count, hex)?,
    }
    Ok(())
}
