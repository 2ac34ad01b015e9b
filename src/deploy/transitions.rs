// ABOUTME: State transition methods for the publish pipeline.
// ABOUTME: Each method consumes self and returns the next phase on success.

use std::marker::PhantomData;

use crate::diagnostics::Diagnostics;
use crate::git::{CommandRunner, GitCli};

use super::Publication;
use super::error::DeployError;
use super::state::{Built, Pending, Prepared, Published, Synced, Verified};
use super::sync;
use super::workspace::{self, BranchOrigin};

impl<S> Publication<S> {
    /// Internal helper to transition to a new phase.
    fn transition<T>(self) -> Publication<T> {
        Publication {
            config: self.config,
            project_dir: self.project_dir,
            message: self.message,
            branch_origin: self.branch_origin,
            _state: PhantomData,
        }
    }

    /// Internal helper to transition recording how the branch was obtained.
    fn transition_with_origin<T>(self, origin: BranchOrigin) -> Publication<T> {
        Publication {
            config: self.config,
            project_dir: self.project_dir,
            message: self.message,
            branch_origin: Some(origin),
            _state: PhantomData,
        }
    }
}

// =============================================================================
// Pending -> Built
// =============================================================================

impl Publication<Pending> {
    /// Run the configured build command with inherited stdio.
    ///
    /// # Errors
    ///
    /// `DeployError::BuildSpawn` if the command cannot start,
    /// `DeployError::BuildFailed` if it exits non-zero. There is no retry.
    pub async fn build<R: CommandRunner>(
        self,
        runner: &R,
    ) -> Result<Publication<Built>, DeployError> {
        let command = &self.config.build.command;
        let program = command.first().clone();
        let args: Vec<&str> = command.tail.iter().map(String::as_str).collect();

        let output = runner
            .run_inherited(&program, &args, Some(&self.project_dir))
            .await
            .map_err(|source| DeployError::BuildSpawn {
                command: program.clone(),
                source,
            })?;

        if !output.success() {
            return Err(DeployError::BuildFailed {
                code: output.exit_code,
            });
        }

        Ok(self.transition())
    }
}

// =============================================================================
// Built -> Verified
// =============================================================================

impl Publication<Built> {
    /// Confirm the build produced its output directory.
    ///
    /// Runs before any version-control mutation, so a missing directory
    /// aborts with the repository untouched.
    pub fn verify_artifacts(self) -> Result<Publication<Verified>, DeployError> {
        let artifact_dir = self.artifact_dir();
        if !artifact_dir.is_dir() {
            return Err(DeployError::ArtifactsMissing(artifact_dir));
        }
        Ok(self.transition())
    }
}

// =============================================================================
// Verified -> Prepared
// =============================================================================

impl Publication<Verified> {
    /// Attach the publish workspace to the hosting branch.
    pub async fn prepare_workspace<R: CommandRunner>(
        self,
        git: &GitCli<R>,
        diag: &mut Diagnostics,
    ) -> Result<Publication<Prepared>, DeployError> {
        let origin = workspace::prepare(git, &self.config.publish, diag).await?;
        Ok(self.transition_with_origin(origin))
    }
}

// =============================================================================
// Prepared -> Synced
// =============================================================================

impl Publication<Prepared> {
    /// Replace the workspace contents with the artifact set plus the marker.
    pub fn sync_artifacts(self) -> Result<Publication<Synced>, DeployError> {
        let workspace = self.workspace_dir();
        let artifacts = self.artifact_dir();

        sync::clear_workspace(&workspace)?;
        sync::copy_tree(&artifacts, &workspace)?;
        sync::write_nojekyll(&workspace)?;

        Ok(self.transition())
    }
}

// =============================================================================
// Synced -> Published
// =============================================================================

impl Publication<Synced> {
    /// Stage, commit, and push the snapshot to the hosting branch.
    pub async fn publish<R: CommandRunner>(
        self,
        git: &GitCli<R>,
    ) -> Result<Publication<Published>, DeployError> {
        let workspace = self.workspace_dir();
        let publish = &self.config.publish;

        git.stage_all(&workspace)
            .await
            .map_err(DeployError::PublishFailed)?;
        git.commit(&workspace, &self.message)
            .await
            .map_err(DeployError::PublishFailed)?;
        git.push(&workspace, &publish.remote, &publish.branch)
            .await
            .map_err(DeployError::PublishFailed)?;

        Ok(self.transition())
    }
}
