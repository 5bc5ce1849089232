use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use packer::{init_tracing, start_server, Packer, ServerConfig};

/// Serve the packer over gRPC
#[derive(Parser, Debug)]
#[command(name = "packer-server", version)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:50051")]
    address: SocketAddr,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level).context("invalid log level")?;

    let config = ServerConfig::new(args.address, Packer::default());
    start_server(config)
        .await
        .with_context(|| format!("server on {} failed", args.address))?;

    Ok(())
}
