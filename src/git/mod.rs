// ABOUTME: Git command surface consumed by the publish pipeline.
// ABOUTME: Generic over CommandRunner so orchestration is testable without git.

mod error;
mod runner;

pub use error::GitError;
pub use runner::{CommandOutput, CommandRunner, Invocation, ProcessRunner};

use std::path::{Path, PathBuf};

use crate::types::{BranchName, RemoteName};

/// The git operations the publisher needs, and nothing else.
///
/// Every method shells out through the injected [`CommandRunner`]. Callers
/// decide which failures are fatal; this layer only reports them.
pub struct GitCli<R> {
    runner: R,
    repo_dir: PathBuf,
}

impl<R: CommandRunner> GitCli<R> {
    pub fn new(runner: R, repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            runner,
            repo_dir: repo_dir.into(),
        }
    }

    pub fn repo_dir(&self) -> &Path {
        &self.repo_dir
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    async fn git(&self, label: &str, dir: &Path, args: &[&str]) -> Result<CommandOutput, GitError> {
        let output = self.runner.run("git", args, Some(dir)).await?;
        if !output.success() {
            return Err(GitError::command_failed(label, &output.stderr));
        }
        Ok(output)
    }

    /// Detach a worktree directory from git's tracking.
    pub async fn worktree_remove(&self, path: &Path, force: bool) -> Result<(), GitError> {
        let path = path.to_string_lossy();
        let mut args = vec!["worktree", "remove", path.as_ref()];
        if force {
            args.push("--force");
        }
        self.git("worktree remove", &self.repo_dir, &args).await?;
        Ok(())
    }

    /// Drop stale worktree registrations.
    pub async fn worktree_prune(&self) -> Result<(), GitError> {
        self.git("worktree prune", &self.repo_dir, &["worktree", "prune"])
            .await?;
        Ok(())
    }

    /// Whether `branch` exists on `remote`.
    ///
    /// A failed query (network down, no such remote) reads as "does not
    /// exist": the caller will then create the branch from scratch.
    pub async fn remote_branch_exists(&self, remote: &RemoteName, branch: &BranchName) -> bool {
        let result = self
            .git(
                "ls-remote",
                &self.repo_dir,
                &["ls-remote", "--heads", remote.as_str(), branch.as_str()],
            )
            .await;

        match result {
            Ok(output) => !output.stdout.trim().is_empty(),
            Err(e) => {
                tracing::debug!("remote branch query failed, assuming absent: {e}");
                false
            }
        }
    }

    /// Fetch `remote/branch` into the same-named local branch.
    pub async fn fetch_branch(
        &self,
        remote: &RemoteName,
        branch: &BranchName,
    ) -> Result<(), GitError> {
        let refspec = format!("{branch}:{branch}");
        self.git(
            "fetch",
            &self.repo_dir,
            &["fetch", remote.as_str(), &refspec],
        )
        .await?;
        Ok(())
    }

    /// Attach a worktree at `path` checked out to `branch`.
    pub async fn worktree_add(
        &self,
        path: &Path,
        branch: &BranchName,
        force: bool,
    ) -> Result<(), GitError> {
        let path = path.to_string_lossy();
        let mut args = vec!["worktree", "add"];
        if force {
            args.push("-f");
        }
        args.push(path.as_ref());
        args.push(branch.as_str());
        self.git("worktree add", &self.repo_dir, &args).await?;
        Ok(())
    }

    /// Attach a detached worktree at `path` (no branch yet).
    pub async fn worktree_add_detached(&self, path: &Path) -> Result<(), GitError> {
        let path = path.to_string_lossy();
        self.git(
            "worktree add",
            &self.repo_dir,
            &["worktree", "add", "--detach", path.as_ref()],
        )
        .await?;
        Ok(())
    }

    /// Convert `worktree` in place to a new parentless branch.
    pub async fn checkout_orphan(
        &self,
        worktree: &Path,
        branch: &BranchName,
    ) -> Result<(), GitError> {
        self.git(
            "checkout --orphan",
            worktree,
            &["checkout", "--orphan", branch.as_str()],
        )
        .await?;
        Ok(())
    }

    /// Remove every tracked file in `worktree` from the index and disk.
    pub async fn remove_tracked(&self, worktree: &Path) -> Result<(), GitError> {
        self.git("rm -rf", worktree, &["rm", "-rf", "-q", "."])
            .await?;
        Ok(())
    }

    /// Stage every change in `worktree`.
    pub async fn stage_all(&self, worktree: &Path) -> Result<(), GitError> {
        self.git("add", worktree, &["add", "-A"]).await?;
        Ok(())
    }

    /// Commit staged changes in `worktree`.
    pub async fn commit(&self, worktree: &Path, message: &str) -> Result<(), GitError> {
        self.git("commit", worktree, &["commit", "-m", message])
            .await?;
        Ok(())
    }

    /// Push `branch` from `worktree` to `remote`.
    pub async fn push(
        &self,
        worktree: &Path,
        remote: &RemoteName,
        branch: &BranchName,
    ) -> Result<(), GitError> {
        self.git(
            "push",
            worktree,
            &["push", remote.as_str(), branch.as_str()],
        )
        .await?;
        Ok(())
    }
}
