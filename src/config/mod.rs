// ABOUTME: Configuration types and parsing for waypost.yml.
// ABOUTME: Handles YAML parsing, defaults, and endpoint resolution.

mod deserialize;
mod init;

pub use init::init_config;

use crate::error::{Error, Result};
use crate::types::{BranchName, RemoteName};
use deserialize::{deserialize_branch_name, deserialize_command, deserialize_remote_name};
use nonempty::NonEmpty;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "waypost.yml";
pub const CONFIG_FILENAME_ALT: &str = "waypost.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".waypost/config.yml";

/// Environment variable that overrides the configured submission endpoint.
pub const SUBMISSION_ENDPOINT_VAR: &str = "WAYPOST_SUBMISSION_ENDPOINT";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub build: BuildConfig,

    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub submission: SubmissionConfig,
}

/// How to produce the static artifact set.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildConfig {
    /// Build command argv; the first element is the program.
    #[serde(deserialize_with = "deserialize_command")]
    pub command: NonEmpty<String>,

    /// Directory the build writes its artifacts to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

/// Where the built site gets published.
#[derive(Debug, Clone, Deserialize)]
pub struct PublishConfig {
    /// Local workspace directory bound to the hosting branch.
    #[serde(default = "default_workspace")]
    pub workspace: PathBuf,

    /// Hosting branch the static snapshot is pushed to.
    #[serde(
        default = "default_branch",
        deserialize_with = "deserialize_branch_name"
    )]
    pub branch: BranchName,

    /// Remote the hosting branch lives on.
    #[serde(
        default = "default_remote",
        deserialize_with = "deserialize_remote_name"
    )]
    pub remote: RemoteName,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            workspace: default_workspace(),
            branch: default_branch(),
            remote: default_remote(),
        }
    }
}

/// Form submission endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionConfig {
    /// Endpoint URL; form submissions are disabled when unset.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Per-request timeout for the submission POST.
    #[serde(default = "default_submission_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: default_submission_timeout(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("build")
}

fn default_workspace() -> PathBuf {
    PathBuf::from("gh-pages")
}

fn default_branch() -> BranchName {
    BranchName::new("gh-pages").expect("default branch name is valid")
}

fn default_remote() -> RemoteName {
    RemoteName::new("origin").expect("default remote name is valid")
}

fn default_submission_timeout() -> Duration {
    Duration::from_secs(10)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Resolve the submission endpoint: the environment variable wins over the
    /// config file. Resolution happens here, at composition time; the
    /// submission client itself never reads ambient state.
    pub fn resolved_endpoint(&self) -> Option<String> {
        std::env::var(SUBMISSION_ENDPOINT_VAR)
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| self.submission.endpoint.clone())
    }

    pub fn template() -> Self {
        Config {
            build: BuildConfig {
                command: NonEmpty::from_vec(
                    ["npm", "run", "build"].map(String::from).to_vec(),
                )
                .expect("template command is non-empty"),
                output_dir: default_output_dir(),
            },
            publish: PublishConfig::default(),
            submission: SubmissionConfig::default(),
        }
    }
}
