// ABOUTME: Generic publication struct parameterized by state marker.
// ABOUTME: One value threads a publish run through its phases.

use chrono::{SecondsFormat, Utc};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::types::BranchName;

use super::state::Pending;
use super::workspace::BranchOrigin;

/// A publish run in progress, parameterized by its current phase.
///
/// Phase ordering is enforced at compile time: each transition consumes the
/// value and returns the next phase, so phases cannot be skipped or repeated.
/// A failed transition is simply an `Err`; the run has no resume, the next
/// invocation starts over from `Pending`.
#[derive(Debug)]
pub struct Publication<S> {
    pub(crate) config: Config,
    pub(crate) project_dir: PathBuf,
    pub(crate) message: String,
    pub(crate) branch_origin: Option<BranchOrigin>,
    pub(crate) _state: PhantomData<S>,
}

impl Publication<Pending> {
    /// Start a run, using the caller's commit message or a timestamped default.
    pub fn new(config: Config, project_dir: impl Into<PathBuf>, message: Option<String>) -> Self {
        Publication {
            config,
            project_dir: project_dir.into(),
            message: message.unwrap_or_else(default_message),
            branch_origin: None,
            _state: PhantomData,
        }
    }
}

impl<S> Publication<S> {
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// The commit message this run will publish under.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn branch(&self) -> &BranchName {
        &self.config.publish.branch
    }

    /// How the hosting branch was obtained; set once the workspace is prepared.
    pub fn branch_origin(&self) -> Option<BranchOrigin> {
        self.branch_origin
    }

    /// Directory the build writes artifacts to.
    pub fn artifact_dir(&self) -> PathBuf {
        self.project_dir.join(&self.config.build.output_dir)
    }

    /// The publish workspace directory.
    pub fn workspace_dir(&self) -> PathBuf {
        self.project_dir.join(&self.config.publish.workspace)
    }
}

/// Default commit message: `Deploy: ` + ISO-8601 UTC timestamp.
pub fn default_message() -> String {
    format!(
        "Deploy: {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}
