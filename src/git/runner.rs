//! Shell command runner
//!
//! Runs an external command given as an argument vector (never a single
//! interpolated string) and captures stdout as UTF-8 text. Synchronous, no
//! retries: a failed command surfaces immediately and the caller decides
//! whether to re-run.

use crate::errors::GitError;
use std::process::Command;
use tracing::debug;

/// Run `program` with `args` and return its standard output as text.
///
/// A non-zero exit status fails with [`GitError::CommandFailed`] carrying
/// the rendered command line, exit code, and captured stderr.
pub fn run(program: &str, args: &[&str]) -> Result<String, GitError> {
    let rendered = render_command(program, args);
    debug!("running `{rendered}`");

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| GitError::Spawn {
            command: rendered.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            command: rendered,
            exit_code: output.status.code().unwrap_or(-1),
            stderr: String::from_utf8_lossy(&output.stderr)
                .trim_end()
                .to_string(),
        });
    }

    String::from_utf8(output.stdout).map_err(|_| GitError::NonUtf8Output { command: rendered })
}

/// Human-readable command line for logs and error messages.
fn render_command(program: &str, args: &[&str]) -> String {
    let mut rendered = String::from(program);
    for arg in args {
        rendered.push(' ');
        rendered.push_str(arg);
    }
    rendered
}
