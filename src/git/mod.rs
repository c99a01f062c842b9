//! Git access through the system `git` binary
//!
//! The extractor needs exactly two history primitives: list the commits
//! touching a path, and retrieve the path's content as of a commit. They are
//! expressed as the [`VersionControl`] trait so tests can substitute a
//! scripted in-memory implementation for a real repository.

pub mod runner;

use crate::errors::GitError;
use crate::models::CommitRef;
use chrono::DateTime;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The two history primitives the extractor needs, plus the history-graph
/// rendering embedded in the persisted artifact.
pub trait VersionControl {
    /// Commits touching `file_path`, newest first. A file with no commits
    /// yields an empty list, not an error.
    fn list_commits(&self, file_path: &str) -> Result<Vec<CommitRef>, GitError>;

    /// Exact content of `file_path` as it existed at `commit_id`.
    ///
    /// Fails with [`GitError::NotFoundInCommit`] when the file was not in
    /// that commit's tree; any other failure propagates as
    /// [`GitError::CommandFailed`].
    fn file_at_commit(&self, commit_id: &str, file_path: &str) -> Result<String, GitError>;

    /// Opaque multi-line rendering of the overall repository topology.
    fn history_graph(&self) -> Result<String, GitError>;
}

/// Production implementation backed by the `git` CLI.
pub struct GitCli {
    repo_path: PathBuf,
}

impl GitCli {
    pub fn new(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
        }
    }

    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }

    fn git(&self, args: &[&str]) -> Result<String, GitError> {
        let repo = self.repo_path.to_string_lossy();
        let mut full_args = vec!["-C", repo.as_ref()];
        full_args.extend_from_slice(args);
        runner::run("git", &full_args)
    }

    /// Whether `commit_id` resolves to a commit object in this repository.
    fn commit_exists(&self, commit_id: &str) -> bool {
        let revision = format!("{commit_id}^{{commit}}");
        self.git(&["cat-file", "-e", &revision]).is_ok()
    }
}

/// stderr patterns `git show` emits when a path is absent from a revision's
/// tree. git uses the same wording for unknown commits, so a match is only
/// meaningful once the commit itself is known to resolve.
fn stderr_means_absent(stderr: &str) -> bool {
    stderr.contains("does not exist in") || stderr.contains("exists on disk, but not in")
}

impl VersionControl for GitCli {
    fn list_commits(&self, file_path: &str) -> Result<Vec<CommitRef>, GitError> {
        let output = self.git(&["log", "--pretty=format:%H|%cI", "--", file_path])?;

        let mut commits = Vec::new();
        for line in output.lines() {
            // Defensive: git can emit trailing blank lines.
            let Some((hash, date)) = line.split_once('|') else {
                continue;
            };
            match DateTime::parse_from_rfc3339(date.trim()) {
                Ok(timestamp) => commits.push(CommitRef {
                    commit_id: hash.to_string(),
                    timestamp,
                }),
                Err(e) => warn!("skipping log line with unparseable date {date:?}: {e}"),
            }
        }

        debug!("found {} commits for {}", commits.len(), file_path);
        Ok(commits)
    }

    fn file_at_commit(&self, commit_id: &str, file_path: &str) -> Result<String, GitError> {
        let object_spec = format!("{commit_id}:{file_path}");
        match self.git(&["show", &object_spec]) {
            Err(GitError::CommandFailed {
                command,
                exit_code,
                stderr,
            }) => {
                // git show reports an unknown commit with the same stderr
                // wording as a missing path, so the stderr match alone
                // cannot distinguish true absence from a bad ref. Only a
                // commit that actually resolves means the file was absent.
                if stderr_means_absent(&stderr) && self.commit_exists(commit_id) {
                    Err(GitError::NotFoundInCommit {
                        commit_id: commit_id.to_string(),
                        file_path: file_path.to_string(),
                    })
                } else {
                    Err(GitError::CommandFailed {
                        command,
                        exit_code,
                        stderr,
                    })
                }
            }
            other => other,
        }
    }

    fn history_graph(&self) -> Result<String, GitError> {
        self.git(&["log", "--oneline", "--graph"])
    }
}
