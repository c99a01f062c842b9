//! `serve` subcommand: read-only HTTP access to the artifacts.

use crate::server;
use anyhow::Result;
use std::path::PathBuf;

pub fn run(index: PathBuf, manifest: PathBuf, host: &str, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(index, manifest, host, port))
}
