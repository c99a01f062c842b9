//! Error taxonomy for the history extractor.
//!
//! `NotFoundInCommit` and `ParseFailure` are expected, recoverable outcomes
//! that the assembler absorbs; everything else propagates to the invocation
//! boundary.

use thiserror::Error;

/// Errors from the version-control layer.
#[derive(Error, Debug)]
pub enum GitError {
    /// An external command exited non-zero.
    #[error("command `{command}` exited with status {exit_code}: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    /// The file did not exist in the tree of the given commit. Legitimate
    /// for files added later or removed earlier in history.
    #[error("{file_path} does not exist in commit {commit_id}")]
    NotFoundInCommit {
        commit_id: String,
        file_path: String,
    },

    /// The command could not be started at all (binary missing, permissions).
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command `{command}` produced non-UTF-8 output")]
    NonUtf8Output { command: String },
}

/// The snapshot text is not syntactically valid under the Python grammar.
///
/// Deliberately carries no feature counts: "could not parse" must never be
/// conflated with "parsed to zero of everything".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("source text is not syntactically valid Python")]
pub struct ParseFailure;
