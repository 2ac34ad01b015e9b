// ABOUTME: Error types for git operations.
// ABOUTME: Distinguishes spawn failures from commands that ran and failed.

use thiserror::Error;

/// Errors from the git command surface.
#[derive(Debug, Error)]
pub enum GitError {
    /// The git binary could not be started at all.
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    /// A git command ran and exited non-zero.
    #[error("git {command} failed: {detail}")]
    CommandFailed { command: String, detail: String },
}

impl GitError {
    /// Build a `CommandFailed` from a command label and its stderr.
    pub fn command_failed(command: impl Into<String>, stderr: &str) -> Self {
        let detail = stderr.trim();
        let detail = if detail.is_empty() {
            "exited with a non-zero status".to_string()
        } else {
            detail.to_string()
        };
        GitError::CommandFailed {
            command: command.into(),
            detail,
        }
    }
}
