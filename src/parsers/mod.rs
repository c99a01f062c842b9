//! Source code parsing using tree-sitter
//!
//! The tracked-file grammar is Python; other file types are not summarized.

pub mod python;

use crate::models::StructuralFeatures;
use anyhow::{Context, Result};
use std::path::Path;

/// Whether the structural parser understands this file.
pub fn is_source_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("py" | "pyi")
    )
}

/// Read and summarize a source file on disk. Used by the workspace indexer;
/// the history extractor parses snapshot text directly via
/// [`python::parse_source`].
pub fn summarize_file(path: &Path) -> Result<StructuralFeatures> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(python::parse_source(&source)?)
}
