// ABOUTME: Deploy command implementation.
// ABOUTME: Runs the publish pipeline under the publish lock.

use std::env;
use std::path::Path;

use waypost::config::Config;
use waypost::deploy::{BranchOrigin, Publication, Published, PublishLock};
use waypost::diagnostics::Diagnostics;
use waypost::error::Result;
use waypost::git::{GitCli, ProcessRunner};
use waypost::output::Output;

/// Build the site and publish it to the hosting branch.
pub async fn deploy(
    config: Config,
    message: Option<String>,
    force: bool,
    mut output: Output,
) -> Result<()> {
    output.start_timer();

    let project_dir = env::current_dir()?;
    let git = GitCli::new(ProcessRunner, project_dir.clone());
    let mut diag = Diagnostics::default();

    let lock = PublishLock::acquire(&project_dir, &config.publish.branch, force)?;
    let result = run_pipeline(config, message, &project_dir, &git, &mut diag, &output).await;
    lock.release(&mut diag);

    for warning in diag.warnings() {
        output.warning(&warning.message);
    }

    let publication = result?;
    output.success(&format!(
        "Deployment complete! Pushed to {}/{}",
        publication.config().publish.remote,
        publication.branch()
    ));
    Ok(())
}

async fn run_pipeline(
    config: Config,
    message: Option<String>,
    project_dir: &Path,
    git: &GitCli<ProcessRunner>,
    diag: &mut Diagnostics,
    output: &Output,
) -> Result<Publication<Published>> {
    let branch = config.publish.branch.clone();
    let publication = Publication::new(config, project_dir, message);

    output.phase("Building project...");
    let publication = publication.build(git.runner()).await?;

    let publication = publication.verify_artifacts()?;

    output.phase(&format!("Setting up {branch} workspace..."));
    let publication = publication.prepare_workspace(git, diag).await?;
    match publication.branch_origin() {
        Some(BranchOrigin::Existing) => {
            output.progress(&format!("attached worktree to existing {branch} branch"));
        }
        Some(BranchOrigin::Created) => {
            output.progress(&format!("created new orphan {branch} branch"));
        }
        None => {}
    }

    output.phase("Copying build files...");
    let publication = publication.sync_artifacts()?;

    output.phase("Committing and pushing...");
    let publication = publication.publish(git).await?;

    Ok(publication)
}
