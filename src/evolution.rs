//! Evolution assembler
//!
//! Drives enumerate → fetch → parse for every commit touching a file and
//! assembles the chronological trend series. Commits where the file is
//! absent, and commits whose snapshot does not parse, are dropped from the
//! series rather than poisoning it.

use crate::errors::GitError;
use crate::git::VersionControl;
use crate::models::TrendRecord;
use crate::parsers::python;
use anyhow::Result;
use tracing::{debug, info};

/// Build the oldest-to-newest trend series for one tracked file.
///
/// Recoverable outcomes (`NotFoundInCommit`, `ParseFailure`) skip the commit
/// and continue; any other git failure aborts the run.
pub fn build_series(vcs: &dyn VersionControl, file_path: &str) -> Result<Vec<TrendRecord>> {
    let commits = vcs.list_commits(file_path)?;
    info!("found {} commits for {}", commits.len(), file_path);

    let mut records = Vec::with_capacity(commits.len());
    for commit in &commits {
        let source = match vcs.file_at_commit(&commit.commit_id, file_path) {
            Ok(text) => text,
            Err(GitError::NotFoundInCommit { .. }) => {
                debug!(
                    "{} not present in commit {}, skipping",
                    file_path, commit.commit_id
                );
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        match python::parse_source(&source) {
            Ok(features) => records.push(TrendRecord::new(commit, features)),
            Err(_) => debug!("snapshot at {} does not parse, skipping", commit.commit_id),
        }
    }

    // git log is newest-first; downstream trend consumers assume
    // monotonically increasing time.
    records.reverse();
    Ok(records)
}
