// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: Defines all subcommands and their arguments.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "waypost")]
#[command(about = "Publish a static site build to a branch-hosted site")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new waypost.yml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Build the site and publish it to the hosting branch
    Deploy {
        /// Commit message (default: timestamped)
        message: Option<String>,

        /// Break a held publish lock
        #[arg(long)]
        force: bool,

        /// Minimal output for CI
        #[arg(short, long, conflicts_with = "json")]
        quiet: bool,

        /// JSON lines output for scripting
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration and hosting branch state
    Status,

    /// Send a test submission to the configured endpoint
    Submit {
        /// Name to submit
        #[arg(long)]
        name: String,

        /// Destination ids to submit
        #[arg(required = true)]
        destinations: Vec<String>,
    },
}
