//! `history` subcommand: build and persist the history database.

use crate::artifacts;
use crate::evolution;
use crate::git::{GitCli, VersionControl};
use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

/// Explicit run configuration for one extraction. Always passed in, never
/// read from ambient state.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    pub repo_path: PathBuf,
    pub file_path: String,
    pub artifact_path: PathBuf,
}

pub fn run(config: &HistoryConfig) -> Result<()> {
    let vcs = GitCli::new(&config.repo_path);

    let series = evolution::build_series(&vcs, &config.file_path)?;
    let graph = vcs.history_graph()?;

    let database = artifacts::write_history_database(
        &config.artifact_path,
        &config.repo_path.to_string_lossy(),
        &config.file_path,
        series,
        graph,
    )?;

    info!(
        "{} trend records for {}",
        database.history.len(),
        config.file_path
    );
    Ok(())
}
