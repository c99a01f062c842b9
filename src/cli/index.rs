//! `index` subcommand: build and persist the workspace index.

use crate::artifacts;
use crate::indexer;
use anyhow::Result;
use std::path::Path;
use tracing::info;

pub fn run(root: &Path, with_summaries: bool, output: &Path) -> Result<()> {
    let index = indexer::build_index(root, with_summaries);
    artifacts::write_json(output, &index)?;
    info!("workspace index saved to {}", output.display());
    Ok(())
}
