//! Core data models for codetrend
//!
//! These models are used throughout the codebase for representing commits,
//! structural metrics, and the persisted JSON artifacts.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// A commit that touched the tracked file. Produced only by the commit
/// enumerator; identity is `commit_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRef {
    /// Full commit hash
    pub commit_id: String,
    /// Commit timestamp with its original UTC offset
    pub timestamp: DateTime<FixedOffset>,
}

/// Coarse structural metrics for a single source snapshot.
///
/// Derived purely from the snapshot text: identical text always yields
/// identical features.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralFeatures {
    pub functions: usize,
    pub classes: usize,
    pub imports: usize,
    pub lines: usize,
}

/// One point of the evolution series: structural features tied to commit
/// identity and timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    pub functions: usize,
    pub classes: usize,
    pub imports: usize,
    pub lines: usize,
    pub commit: String,
    pub date: DateTime<FixedOffset>,
}

impl TrendRecord {
    pub fn new(commit: &CommitRef, features: StructuralFeatures) -> Self {
        Self {
            functions: features.functions,
            classes: features.classes,
            imports: features.imports,
            lines: features.lines,
            commit: commit.commit_id.clone(),
            date: commit.timestamp,
        }
    }
}

/// The persisted history artifact. Written once per run, overwriting any
/// prior artifact wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryDatabase {
    pub repo_path: String,
    pub file_path: String,
    pub generated_at: DateTime<Utc>,
    /// Strictly oldest-to-newest
    pub history: Vec<TrendRecord>,
    /// Opaque multi-line rendering of the repository topology
    pub git_history_graph: String,
}

/// One file in the workspace index.
///
/// `summary` is populated only for recognized source files. A per-entry
/// failure lands in `error` instead of aborting the whole walk, so callers
/// can tell "file unreadable" from "file absent from the report".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Path relative to the indexed root, with forward slashes
    pub name: String,
    pub size: Option<u64>,
    pub last_modified: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<StructuralFeatures>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Workspace index artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceIndex {
    pub files: Vec<IndexEntry>,
}

/// Project manifest artifact: static metadata plus an embedded copy of the
/// workspace index's file list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub project_name: String,
    pub description: String,
    pub language: Vec<String>,
    pub platform: String,
    pub main_files: Vec<String>,
    pub index_file: String,
    pub files: Vec<IndexEntry>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn test_trend_record_json_shape() {
        let commit = CommitRef {
            commit_id: "a".repeat(40),
            timestamp: DateTime::parse_from_rfc3339("2024-05-01T12:00:00+02:00").unwrap(),
        };
        let record = TrendRecord::new(
            &commit,
            StructuralFeatures {
                functions: 2,
                classes: 1,
                imports: 3,
                lines: 10,
            },
        );

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["functions"], 2);
        assert_eq!(value["classes"], 1);
        assert_eq!(value["imports"], 3);
        assert_eq!(value["lines"], 10);
        assert_eq!(value["commit"], "a".repeat(40));
        // ISO 8601 with the original offset preserved
        assert_eq!(value["date"], "2024-05-01T12:00:00+02:00");
    }

    #[test]
    fn test_index_entry_omits_empty_optionals() {
        let entry = IndexEntry {
            name: "README.md".to_string(),
            size: Some(12),
            ..Default::default()
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value.get("summary").is_none());
        assert!(value.get("error").is_none());
    }
}
