// ABOUTME: Publish lock to prevent overlapping runs against one repository.
// ABOUTME: Uses atomic file creation with lock info stored in .waypost/.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::diagnostics::{Diagnostics, Warning};
use crate::types::BranchName;

use super::error::DeployError;

/// Directory for waypost state files inside the project.
const STATE_DIR: &str = ".waypost";

const LOCK_FILENAME: &str = "publish.lock";

/// Information about who holds the publish lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LockInfo {
    /// Hostname of the machine that holds the lock.
    pub holder: String,
    /// Process ID of the lock holder.
    pub pid: u32,
    /// When the lock was acquired.
    pub started_at: DateTime<Utc>,
    /// Hosting branch being published.
    pub branch: String,
}

impl LockInfo {
    /// Create new lock info for the current process.
    pub fn new(branch: &BranchName) -> Self {
        Self {
            holder: gethostname::gethostname().to_string_lossy().into_owned(),
            pid: std::process::id(),
            started_at: Utc::now(),
            branch: branch.to_string(),
        }
    }

    /// Check if this lock is stale (older than 1 hour).
    pub fn is_stale(&self) -> bool {
        let age = Utc::now() - self.started_at;
        age.num_hours() >= 1
    }

    /// Path to the lock file for a project.
    pub fn lock_path(project_dir: &Path) -> PathBuf {
        project_dir.join(STATE_DIR).join(LOCK_FILENAME)
    }
}

/// A held publish lock. Released explicitly; release failure is a warning.
#[derive(Debug)]
pub struct PublishLock {
    path: PathBuf,
}

impl PublishLock {
    /// Acquire the publish lock for a project.
    ///
    /// Uses `create_new` for atomic lock acquisition (no TOCTOU race).
    /// Returns an error if the lock is already held by another process.
    /// Auto-breaks stale locks (>1 hour) with a warning.
    pub fn acquire(
        project_dir: &Path,
        branch: &BranchName,
        force: bool,
    ) -> Result<Self, DeployError> {
        let path = LockInfo::lock_path(project_dir);

        fs::create_dir_all(path.parent().expect("lock path has a parent")).map_err(|e| {
            DeployError::lock_error(format!("failed to create state directory: {e}"))
        })?;

        let info = LockInfo::new(branch);
        let json = serde_json::to_string(&info)
            .map_err(|e| DeployError::lock_error(format!("failed to serialize lock: {e}")))?;

        if Self::try_create(&path, &json)? {
            return Ok(Self { path });
        }

        // Lock file exists - decide whether to break it
        if !Self::should_break(&path, force)? {
            if let Ok(content) = fs::read_to_string(&path)
                && let Ok(existing) = serde_json::from_str::<LockInfo>(&content)
            {
                return Err(DeployError::LockHeld {
                    holder: existing.holder,
                    pid: existing.pid,
                    started_at: existing.started_at,
                });
            }
            return Err(DeployError::lock_error("lock held by another process"));
        }

        tracing::debug!("removing stale/forced lock at {}", path.display());
        let _ = fs::remove_file(&path);

        if !Self::try_create(&path, &json)? {
            return Err(DeployError::lock_error(
                "lock acquired by another process during break",
            ));
        }

        Ok(Self { path })
    }

    /// Atomically create the lock file. Returns false if it already exists.
    fn try_create(path: &Path, json: &str) -> Result<bool, DeployError> {
        match OpenOptions::new().write(true).create_new(true).open(path) {
            Ok(mut file) => {
                file.write_all(json.as_bytes())
                    .map_err(|e| DeployError::lock_error(format!("failed to write lock: {e}")))?;
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(DeployError::lock_error(format!(
                "failed to create lock file: {e}"
            ))),
        }
    }

    /// Check if an existing lock should be broken (stale, forced, or corrupted).
    fn should_break(path: &Path, force: bool) -> Result<bool, DeployError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                tracing::warn!("lock info unreadable, breaking lock");
                return Ok(true);
            }
        };

        match serde_json::from_str::<LockInfo>(&content) {
            Ok(existing) => {
                if force {
                    tracing::warn!(
                        "breaking lock held by {} (pid {}) since {}",
                        existing.holder,
                        existing.pid,
                        existing.started_at
                    );
                    Ok(true)
                } else if existing.is_stale() {
                    tracing::warn!(
                        "auto-breaking stale lock held by {} (pid {}) since {}",
                        existing.holder,
                        existing.pid,
                        existing.started_at
                    );
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            Err(_) => {
                tracing::warn!("lock info corrupted, breaking lock");
                Ok(true)
            }
        }
    }

    /// Release the lock; failure is recorded as a warning, never an error.
    pub fn release(self, diag: &mut Diagnostics) {
        if let Err(e) = fs::remove_file(&self.path) {
            diag.warn(Warning::lock_release(format!(
                "failed to remove lock file {}: {e}",
                self.path.display()
            )));
        }
    }
}
