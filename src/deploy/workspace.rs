// ABOUTME: Publish workspace preparation.
// ABOUTME: Binds a worktree to the hosting branch, creating it when absent.

use std::path::{Path, PathBuf};

use crate::config::PublishConfig;
use crate::diagnostics::{Diagnostics, Warning};
use crate::git::{CommandRunner, GitCli};

use super::error::DeployError;

/// How the workspace ended up bound to the hosting branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchOrigin {
    /// The branch already existed on the remote; the worktree tracks it.
    Existing,
    /// The branch was created from scratch as a parentless branch.
    Created,
}

/// Absolute path of the publish workspace for this repository.
pub fn workspace_path<R: CommandRunner>(git: &GitCli<R>, publish: &PublishConfig) -> PathBuf {
    git.repo_dir().join(&publish.workspace)
}

/// Prepare the publish workspace: tear down whatever a previous run left
/// behind, then attach a fresh worktree bound to the hosting branch.
///
/// Fatal errors mean the worktree could not be attached at all. Cleanup
/// steps that the following phase is resilient to are recorded as warnings.
pub async fn prepare<R: CommandRunner>(
    git: &GitCli<R>,
    publish: &PublishConfig,
    diag: &mut Diagnostics,
) -> Result<BranchOrigin, DeployError> {
    let workspace = workspace_path(git, publish);

    remove_existing(git, &workspace).await?;

    // A killed run can leave a registration pointing at a directory we just
    // deleted; pruning is a hint, the -f on worktree add is the guarantee.
    if let Err(e) = git.worktree_prune().await {
        diag.warn(Warning::worktree_prune(format!(
            "failed to prune stale worktrees: {e}"
        )));
    }

    if git
        .remote_branch_exists(&publish.remote, &publish.branch)
        .await
    {
        tracing::info!("found existing {} branch on remote", publish.branch);

        if let Err(e) = git.fetch_branch(&publish.remote, &publish.branch).await {
            diag.warn(Warning::branch_fetch(format!(
                "failed to fetch {}, using local copy: {e}",
                publish.branch
            )));
        }

        git.worktree_add(&workspace, &publish.branch, true)
            .await
            .map_err(|e| DeployError::WorkspaceSetup(e.to_string()))?;

        Ok(BranchOrigin::Existing)
    } else {
        tracing::info!("{} branch does not exist yet, creating it", publish.branch);

        git.worktree_add_detached(&workspace)
            .await
            .map_err(|e| DeployError::WorkspaceSetup(e.to_string()))?;

        git.checkout_orphan(&workspace, &publish.branch)
            .await
            .map_err(|e| DeployError::WorkspaceSetup(e.to_string()))?;

        // A fresh orphan usually carries the parent checkout's index; clearing
        // it is best-effort since an empty index makes git rm exit non-zero.
        if let Err(e) = git.remove_tracked(&workspace).await {
            diag.warn(Warning::tracked_file_removal(format!(
                "failed to clear tracked files from orphan worktree: {e}"
            )));
        }

        Ok(BranchOrigin::Created)
    }
}

/// Detach a leftover workspace, falling back to plain deletion.
///
/// The fallback covers directories a killed run left half-registered, where
/// git refuses to treat them as worktrees at all.
async fn remove_existing<R: CommandRunner>(
    git: &GitCli<R>,
    workspace: &Path,
) -> Result<(), DeployError> {
    if !workspace.exists() {
        return Ok(());
    }

    tracing::debug!("removing existing worktree at {}", workspace.display());

    if let Err(e) = git.worktree_remove(workspace, true).await {
        tracing::debug!("worktree remove failed ({e}), deleting directory instead");
        std::fs::remove_dir_all(workspace)
            .map_err(|e| DeployError::WorkspaceSetup(format!("failed to delete workspace: {e}")))?;
    }

    Ok(())
}
