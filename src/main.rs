use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use codetrend::cli;

fn main() -> Result<()> {
    // Parse CLI args first so --log-level can seed the filter; RUST_LOG
    // still wins when set.
    let cli = cli::Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone())),
        )
        .init();

    cli::run(cli)
}
