// ABOUTME: Integration tests for the publish pipeline against a scripted runner.
// ABOUTME: Covers branch strategies, best-effort cleanup, and fatal aborts.

mod support;

use std::fs;
use std::path::PathBuf;

use support::FakeRunner;
use tempfile::TempDir;
use waypost::config::Config;
use waypost::deploy::{BranchOrigin, DeployError, Publication};
use waypost::diagnostics::{Diagnostics, WarningKind};
use waypost::git::GitCli;

fn test_config() -> Config {
    Config::from_yaml(
        r#"
build:
  command: [npm, run, build]
"#,
    )
    .unwrap()
}

/// Project directory with a populated build output.
fn project_with_artifacts() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("build/assets")).unwrap();
    fs::write(dir.path().join("build/index.html"), "<html>").unwrap();
    fs::write(dir.path().join("build/assets/app.js"), "js").unwrap();
    dir
}

/// Script `git worktree add` to create the directory a real one would.
fn script_worktree_add(runner: &FakeRunner, needle: &str, workspace: PathBuf) {
    runner.on_success_with(needle, "", move |_| {
        fs::create_dir_all(workspace.join(".git")).unwrap();
        fs::write(workspace.join(".git/HEAD"), "ref").unwrap();
    });
}

#[tokio::test]
async fn full_run_publishes_to_existing_branch() {
    support::init_tracing();
    let project = project_with_artifacts();
    let workspace = project.path().join("gh-pages");

    let runner = FakeRunner::new();
    runner.on_success("ls-remote", "abc123\trefs/heads/gh-pages\n");
    {
        let ws = workspace.clone();
        runner.on_success_with("worktree add", "", move |_| {
            fs::create_dir_all(ws.join(".git")).unwrap();
            fs::write(ws.join(".git/HEAD"), "ref").unwrap();
            fs::write(ws.join("stale.html"), "old").unwrap();
        });
    }

    let git = GitCli::new(runner.clone(), project.path());
    let mut diag = Diagnostics::default();

    let publication = Publication::new(
        test_config(),
        project.path(),
        Some("Deploy: test".to_string()),
    );
    let publication = publication.build(&runner).await.unwrap();
    let publication = publication.verify_artifacts().unwrap();
    let publication = publication.prepare_workspace(&git, &mut diag).await.unwrap();
    assert_eq!(publication.branch_origin(), Some(BranchOrigin::Existing));

    let publication = publication.sync_artifacts().unwrap();
    assert!(workspace.join(".nojekyll").exists());
    assert!(workspace.join("index.html").exists());
    assert!(workspace.join("assets/app.js").exists());
    assert!(!workspace.join("stale.html").exists());
    assert!(workspace.join(".git/HEAD").exists());

    let publication = publication.publish(&git).await.unwrap();
    assert_eq!(publication.message(), "Deploy: test");
    assert!(!diag.has_warnings());

    let lines = runner.lines();
    assert!(lines.contains(&"npm run build".to_string()));
    assert!(lines.contains(&"git worktree prune".to_string()));
    assert!(lines.contains(&"git fetch origin gh-pages:gh-pages".to_string()));
    assert!(lines.iter().any(|l| l.starts_with("git worktree add -f")));
    assert!(lines.contains(&"git add -A".to_string()));
    assert!(lines.contains(&"git commit -m Deploy: test".to_string()));
    assert!(lines.contains(&"git push origin gh-pages".to_string()));

    // Commit runs inside the workspace, not the project root.
    let commit = runner
        .invocations()
        .into_iter()
        .find(|i| i.args.first().map(String::as_str) == Some("commit"))
        .unwrap();
    assert_eq!(commit.cwd.as_deref(), Some(workspace.as_path()));
}

#[tokio::test]
async fn absent_remote_branch_is_created_as_orphan() {
    let project = project_with_artifacts();
    let workspace = project.path().join("gh-pages");

    let runner = FakeRunner::new();
    runner.on_success("ls-remote", "");
    script_worktree_add(&runner, "worktree add --detach", workspace.clone());

    let git = GitCli::new(runner.clone(), project.path());
    let mut diag = Diagnostics::default();

    let publication = Publication::new(test_config(), project.path(), None)
        .build(&runner)
        .await
        .unwrap()
        .verify_artifacts()
        .unwrap()
        .prepare_workspace(&git, &mut diag)
        .await
        .unwrap();

    assert_eq!(publication.branch_origin(), Some(BranchOrigin::Created));

    let lines = runner.lines();
    assert!(lines.iter().any(|l| l.contains("worktree add --detach")));
    assert!(lines.contains(&"git checkout --orphan gh-pages".to_string()));
    assert!(lines.contains(&"git rm -rf -q .".to_string()));
    // No fetch when the branch is being created from scratch.
    assert!(!lines.iter().any(|l| l.starts_with("git fetch")));
}

#[tokio::test]
async fn failed_branch_query_reads_as_absent() {
    let project = project_with_artifacts();
    let workspace = project.path().join("gh-pages");

    let runner = FakeRunner::new();
    runner.on_failure("ls-remote", "could not resolve host");
    script_worktree_add(&runner, "worktree add --detach", workspace);

    let git = GitCli::new(runner.clone(), project.path());
    let mut diag = Diagnostics::default();

    let publication = Publication::new(test_config(), project.path(), None)
        .build(&runner)
        .await
        .unwrap()
        .verify_artifacts()
        .unwrap()
        .prepare_workspace(&git, &mut diag)
        .await
        .unwrap();

    assert_eq!(publication.branch_origin(), Some(BranchOrigin::Created));
}

#[tokio::test]
async fn fetch_failure_is_downgraded_to_warning() {
    let project = project_with_artifacts();
    let workspace = project.path().join("gh-pages");

    let runner = FakeRunner::new();
    runner.on_success("ls-remote", "abc123\trefs/heads/gh-pages\n");
    runner.on_failure("fetch", "remote hung up");
    script_worktree_add(&runner, "worktree add", workspace);

    let git = GitCli::new(runner.clone(), project.path());
    let mut diag = Diagnostics::default();

    let publication = Publication::new(test_config(), project.path(), None)
        .build(&runner)
        .await
        .unwrap()
        .verify_artifacts()
        .unwrap()
        .prepare_workspace(&git, &mut diag)
        .await
        .unwrap();

    assert_eq!(publication.branch_origin(), Some(BranchOrigin::Existing));
    assert!(
        diag.warnings()
            .iter()
            .any(|w| w.kind == WarningKind::BranchFetch)
    );
}

#[tokio::test]
async fn prune_failure_is_downgraded_to_warning() {
    let project = project_with_artifacts();
    let workspace = project.path().join("gh-pages");

    let runner = FakeRunner::new();
    runner.on_failure("worktree prune", "lock contention");
    runner.on_success("ls-remote", "");
    script_worktree_add(&runner, "worktree add --detach", workspace);

    let git = GitCli::new(runner.clone(), project.path());
    let mut diag = Diagnostics::default();

    let result = Publication::new(test_config(), project.path(), None)
        .build(&runner)
        .await
        .unwrap()
        .verify_artifacts()
        .unwrap()
        .prepare_workspace(&git, &mut diag)
        .await;

    assert!(result.is_ok());
    assert!(
        diag.warnings()
            .iter()
            .any(|w| w.kind == WarningKind::WorktreePrune)
    );
}

#[tokio::test]
async fn orphan_tracked_file_clear_failure_is_a_warning() {
    let project = project_with_artifacts();
    let workspace = project.path().join("gh-pages");

    let runner = FakeRunner::new();
    runner.on_success("ls-remote", "");
    runner.on_failure("rm -rf", "pathspec '.' did not match any files");
    script_worktree_add(&runner, "worktree add --detach", workspace);

    let git = GitCli::new(runner.clone(), project.path());
    let mut diag = Diagnostics::default();

    let result = Publication::new(test_config(), project.path(), None)
        .build(&runner)
        .await
        .unwrap()
        .verify_artifacts()
        .unwrap()
        .prepare_workspace(&git, &mut diag)
        .await;

    assert!(result.is_ok());
    assert!(
        diag.warnings()
            .iter()
            .any(|w| w.kind == WarningKind::TrackedFileRemoval)
    );
}

#[tokio::test]
async fn leftover_workspace_is_deleted_when_detach_fails() {
    let project = project_with_artifacts();
    let workspace = project.path().join("gh-pages");

    // A killed previous run left a half-registered directory behind.
    fs::create_dir_all(&workspace).unwrap();
    fs::write(workspace.join("leftover.html"), "junk").unwrap();

    let runner = FakeRunner::new();
    runner.on_failure("worktree remove", "is not a working tree");
    runner.on_success("ls-remote", "");
    script_worktree_add(&runner, "worktree add --detach", workspace.clone());

    let git = GitCli::new(runner.clone(), project.path());
    let mut diag = Diagnostics::default();

    let result = Publication::new(test_config(), project.path(), None)
        .build(&runner)
        .await
        .unwrap()
        .verify_artifacts()
        .unwrap()
        .prepare_workspace(&git, &mut diag)
        .await;

    assert!(result.is_ok());
    assert!(!workspace.join("leftover.html").exists());
    assert!(
        runner
            .lines()
            .iter()
            .any(|l| l.starts_with("git worktree remove"))
    );
}

#[tokio::test]
async fn build_failure_aborts_the_run() {
    let project = project_with_artifacts();

    let runner = FakeRunner::new();
    runner.on_failure("npm run build", "");

    let result = Publication::new(test_config(), project.path(), None)
        .build(&runner)
        .await;

    assert!(matches!(
        result,
        Err(DeployError::BuildFailed { code: Some(1) })
    ));
}

#[tokio::test]
async fn missing_artifacts_abort_before_any_git_mutation() {
    let project = tempfile::tempdir().unwrap();

    let runner = FakeRunner::new();

    let result = Publication::new(test_config(), project.path(), None)
        .build(&runner)
        .await
        .unwrap()
        .verify_artifacts();

    assert!(matches!(result, Err(DeployError::ArtifactsMissing(_))));
    assert!(
        runner.invocations().iter().all(|i| i.program != "git"),
        "no git command may run before artifacts are verified"
    );
}

#[tokio::test]
async fn rerun_against_existing_branch_recreates_the_worktree() {
    let project = project_with_artifacts();
    let workspace = project.path().join("gh-pages");

    let runner = FakeRunner::new();
    runner.on_success("ls-remote", "abc123\trefs/heads/gh-pages\n");
    script_worktree_add(&runner, "worktree add", workspace.clone());

    let git = GitCli::new(runner.clone(), project.path());

    for _ in 0..2 {
        let mut diag = Diagnostics::default();
        let publication = Publication::new(test_config(), project.path(), None)
            .build(&runner)
            .await
            .unwrap()
            .verify_artifacts()
            .unwrap()
            .prepare_workspace(&git, &mut diag)
            .await
            .unwrap()
            .sync_artifacts()
            .unwrap();
        publication.publish(&git).await.unwrap();
    }

    // The second run detaches the worktree the first run left behind.
    let removals = runner
        .lines()
        .iter()
        .filter(|l| l.starts_with("git worktree remove"))
        .count();
    assert_eq!(removals, 1);

    let pushes = runner
        .lines()
        .iter()
        .filter(|l| l.starts_with("git push"))
        .count();
    assert_eq!(pushes, 2);
}
