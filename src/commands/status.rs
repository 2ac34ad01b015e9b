// ABOUTME: Status command implementation.
// ABOUTME: Prints the effective configuration and remote branch state.

use std::env;

use waypost::config::Config;
use waypost::error::Result;
use waypost::git::{GitCli, ProcessRunner};

/// Show the effective configuration and whether the hosting branch exists.
pub async fn status(config: Config) -> Result<()> {
    let project_dir = env::current_dir()?;
    let git = GitCli::new(ProcessRunner, project_dir);

    let command: Vec<&str> = config.build.command.iter().map(String::as_str).collect();
    println!("Build command: {}", command.join(" "));
    println!("Build output:  {}", config.build.output_dir.display());
    println!(
        "Publishing:    {} -> {}/{}",
        config.publish.workspace.display(),
        config.publish.remote,
        config.publish.branch
    );

    let exists = git
        .remote_branch_exists(&config.publish.remote, &config.publish.branch)
        .await;
    println!(
        "Remote branch: {}",
        if exists { "present" } else { "absent" }
    );

    match config.resolved_endpoint() {
        Some(endpoint) => println!("Submissions:   {endpoint}"),
        None => println!("Submissions:   disabled (no endpoint configured)"),
    }

    Ok(())
}
