//! Workspace index and project manifest
//!
//! Best-effort collaborators around the core extractor: a recursive walk
//! that describes every file in a tree, and a manifest embedding that
//! index. Failures are recorded per entry, never allowed to abort the walk.

use crate::models::{IndexEntry, Manifest, WorkspaceIndex};
use crate::parsers;
use anyhow::Result;
use chrono::{DateTime, Utc};
use ignore::WalkBuilder;
use std::path::Path;
use tracing::{info, warn};

/// Walk `root` and describe every file found. Entries are sorted by name so
/// repeated runs over the same tree produce identical artifacts.
pub fn build_index(root: &Path, with_summaries: bool) -> WorkspaceIndex {
    let mut files = Vec::new();

    // Standard filters: hidden entries (.git included) and gitignored files
    // stay out of the index.
    for walk_result in WalkBuilder::new(root).build() {
        let entry = match walk_result {
            Ok(entry) => entry,
            Err(e) => {
                warn!("walk error under {}: {e}", root.display());
                continue;
            }
        };
        if !entry.file_type().map_or(false, |t| t.is_file()) {
            continue;
        }

        let path = entry.path();
        let name = path
            .strip_prefix(root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");
        let mut record = IndexEntry {
            name,
            ..Default::default()
        };

        match path.metadata() {
            Ok(metadata) => {
                record.size = Some(metadata.len());
                record.last_modified = metadata.modified().ok().map(DateTime::<Utc>::from);
                if with_summaries && parsers::is_source_file(path) {
                    match parsers::summarize_file(path) {
                        Ok(summary) => record.summary = Some(summary),
                        Err(e) => record.error = Some(e.to_string()),
                    }
                }
            }
            Err(e) => record.error = Some(e.to_string()),
        }

        files.push(record);
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    info!("indexed {} files under {}", files.len(), root.display());
    WorkspaceIndex { files }
}

/// Build the project manifest, embedding the `files` array of the index
/// artifact at `index_path`. A missing or malformed index yields an empty
/// file list rather than an error.
pub fn build_manifest(
    index_path: &Path,
    project_name: &str,
    description: &str,
    main_files: Vec<String>,
) -> Manifest {
    let files = match read_index(index_path) {
        Ok(index) => index.files,
        Err(e) => {
            warn!("could not read index at {}: {e:#}", index_path.display());
            Vec::new()
        }
    };

    Manifest {
        project_name: project_name.to_string(),
        description: description.to_string(),
        language: vec!["Python".to_string()],
        platform: std::env::consts::OS.to_string(),
        main_files,
        index_file: index_path.to_string_lossy().to_string(),
        files,
        generated_at: Utc::now(),
    }
}

fn read_index(path: &Path) -> Result<WorkspaceIndex> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts;
    use std::fs;

    #[test]
    fn test_index_describes_files_with_summaries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("app.py"),
            "import os\n\nclass App:\n    def run(self):\n        pass\n",
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "not source\n").unwrap();

        let index = build_index(dir.path(), true);
        assert_eq!(index.files.len(), 2);

        let app = index.files.iter().find(|f| f.name == "app.py").unwrap();
        let summary = app.summary.expect("python file gets a summary");
        assert_eq!(summary.classes, 1);
        assert_eq!(summary.functions, 1);
        assert!(app.size.is_some());
        assert!(app.last_modified.is_some());
        assert!(app.error.is_none());

        let notes = index.files.iter().find(|f| f.name == "notes.txt").unwrap();
        assert!(notes.summary.is_none());
    }

    #[test]
    fn test_unparseable_source_gets_error_not_abort() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.py"), "def broken(:\n").unwrap();
        fs::write(dir.path().join("good.py"), "x = 1\n").unwrap();

        let index = build_index(dir.path(), true);
        assert_eq!(index.files.len(), 2);

        let bad = index.files.iter().find(|f| f.name == "bad.py").unwrap();
        assert!(bad.summary.is_none());
        assert!(bad.error.is_some());
    }

    #[test]
    fn test_index_without_summaries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.py"), "x = 1\n").unwrap();

        let index = build_index(dir.path(), false);
        assert!(index.files[0].summary.is_none());
    }

    #[test]
    fn test_manifest_embeds_index_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("app.py"), "x = 1\n").unwrap();

        let index_path = dir.path().join("workspace_index.json");
        let index = build_index(dir.path(), false);
        artifacts::write_json(&index_path, &index).unwrap();

        let manifest = build_manifest(
            &index_path,
            "demo",
            "demo workspace",
            vec!["app.py".to_string()],
        );
        assert_eq!(manifest.project_name, "demo");
        assert_eq!(manifest.platform, std::env::consts::OS);
        // The index file itself is written after the walk, so only app.py.
        assert!(manifest.files.iter().any(|f| f.name == "app.py"));
        assert_eq!(manifest.main_files, vec!["app.py".to_string()]);
    }

    #[test]
    fn test_manifest_with_missing_index_is_empty_not_error() {
        let manifest = build_manifest(
            Path::new("/no/such/index.json"),
            "demo",
            "demo workspace",
            Vec::new(),
        );
        assert!(manifest.files.is_empty());
    }
}
