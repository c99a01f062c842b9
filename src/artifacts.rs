//! Persisted JSON artifacts
//!
//! Every artifact goes through the same path: serialize pretty-printed JSON,
//! write to a sibling temp file, then rename over the destination (atomic on
//! POSIX). A write failure is fatal to the run and leaves no partial
//! artifact at the destination.

use crate::models::{HistoryDatabase, TrendRecord};
use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Serialize `value` as pretty JSON at `path`, replacing any prior artifact
/// wholesale.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize artifact")?;

    // Write to temp file first, then rename (atomic on POSIX)
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, json)
        .with_context(|| format!("Failed to write temp artifact {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move artifact into place at {}", path.display()))?;

    Ok(())
}

/// Assemble the history database for this run and persist it, stamping a
/// fresh `generated_at`.
pub fn write_history_database(
    path: &Path,
    repo_path: &str,
    file_path: &str,
    history: Vec<TrendRecord>,
    git_history_graph: String,
) -> Result<HistoryDatabase> {
    let database = HistoryDatabase {
        repo_path: repo_path.to_string(),
        file_path: file_path.to_string(),
        generated_at: Utc::now(),
        history,
        git_history_graph,
    };

    write_json(path, &database)?;
    info!("history database saved to {}", path.display());
    Ok(database)
}
