// ABOUTME: Error types for publish pipeline operations.
// ABOUTME: Every variant here is fatal; best-effort failures become warnings.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

use crate::git::GitError;

/// Fatal errors from the publish pipeline.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// The build command exited non-zero.
    #[error("build command exited with {}", display_exit(.code))]
    BuildFailed { code: Option<i32> },

    /// The build command could not be started.
    #[error("failed to run build command '{command}': {source}")]
    BuildSpawn {
        command: String,
        source: std::io::Error,
    },

    /// The artifact directory was missing after a successful build.
    #[error("build output directory not found: {0}")]
    ArtifactsMissing(PathBuf),

    /// Workspace preparation failed in a non-recoverable way.
    #[error("failed to set up publish workspace: {0}")]
    WorkspaceSetup(String),

    /// Copying artifacts into the workspace failed.
    #[error("failed to sync artifacts: {0}")]
    SyncFailed(#[from] std::io::Error),

    /// Commit or push to the hosting branch failed.
    #[error("failed to publish: {0}")]
    PublishFailed(GitError),

    /// Another publish run holds the lock.
    #[error("publish lock held by {holder} (pid {pid}) since {started_at}")]
    LockHeld {
        holder: String,
        pid: u32,
        started_at: DateTime<Utc>,
    },

    /// The lock file could not be created, read, or serialized.
    #[error("publish lock error: {0}")]
    Lock(String),
}

impl DeployError {
    pub fn lock_error(message: impl Into<String>) -> Self {
        DeployError::Lock(message.into())
    }
}

fn display_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
