use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use packer::{init_tracing, Packer};

/// Pick the most valuable package for every line of an input file
#[derive(Parser, Debug)]
#[command(name = "packer", version)]
struct Args {
    /// Input file, one packing problem per line
    input: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level).context("invalid log level")?;

    let output = Packer::default()
        .pack_file(&args.input)
        .with_context(|| format!("failed to pack {}", args.input.display()))?;

    println!("{}", output);
    Ok(())
}
