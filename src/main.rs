// ABOUTME: Entry point for the waypost CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use std::env;
use tracing_subscriber::EnvFilter;
use waypost::config::{self, Config};
use waypost::error::Result;
use waypost::output::{Output, OutputMode};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { force } => {
            let cwd = env::current_dir()?;
            config::init_config(&cwd, force)
        }
        Commands::Deploy {
            message,
            force,
            quiet,
            json,
        } => {
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;

            let mode = if json {
                OutputMode::Json
            } else if quiet {
                OutputMode::Quiet
            } else {
                OutputMode::Normal
            };

            commands::deploy(config, message, force, Output::new(mode)).await
        }
        Commands::Status => {
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;
            commands::status(config).await
        }
        Commands::Submit { name, destinations } => {
            let cwd = env::current_dir()?;
            let config = Config::discover(&cwd)?;
            commands::submit(config, name, destinations).await
        }
    }
}
