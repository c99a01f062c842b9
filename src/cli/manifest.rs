//! `manifest` subcommand: build and persist the project manifest.

use crate::artifacts;
use crate::indexer;
use anyhow::Result;
use std::path::Path;
use tracing::info;

pub fn run(
    index_path: &Path,
    name: &str,
    description: &str,
    main_files: Vec<String>,
    output: &Path,
) -> Result<()> {
    let manifest = indexer::build_manifest(index_path, name, description, main_files);
    artifacts::write_json(output, &manifest)?;
    info!("manifest saved to {}", output.display());
    Ok(())
}
