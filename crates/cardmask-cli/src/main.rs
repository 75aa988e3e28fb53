//! Cardmask CLI
//!
//! Command-line front end over `cardmask-core`: reads delimited text from a
//! file or stdin, masks sensitive payment values, and writes the result to
//! stdout or a file. Logs go to stderr so stdout stays a clean payload.

use anyhow::Context;
use cardmask_core::{Masker, MaskerConfig};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "cardmask")]
#[command(about = "Mask sensitive payment fields in delimited text", long_about = None)]
struct Cli {
    /// Input file (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Additional case-insensitive field-name pattern to mask without
    /// validation; may be given multiple times, tried in order after the
    /// built-ins
    #[arg(short = 'p', long = "pattern", value_name = "REGEX")]
    patterns: Vec<String>,

    /// Write output to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Log level filter written to stderr
    #[arg(long, value_name = "LEVEL", env = "CARDMASK_LOG", default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::new(&cli.log_level);
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {:?}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            buffer
        }
    };
    debug!("read {} byte(s) of input", input.len());

    let masker = Masker::new(MaskerConfig {
        extra_patterns: cli.patterns,
    })?;
    let masked = masker.mask(&input);

    match &cli.output {
        Some(path) => std::fs::write(path, masked)
            .with_context(|| format!("Failed to write output file {:?}", path))?,
        None => print!("{masked}"),
    }

    Ok(())
}
