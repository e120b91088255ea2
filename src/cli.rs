//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use relcheck::output::OutputMode;

/// relcheck - Release checklist gate for deployment pipelines
#[derive(Parser, Debug)]
#[command(
    name = "relcheck",
    version,
    about = "Gate deployments on a release checklist issue",
    long_about = "Verify a release checklist before deploying.\n\n\
                  The checklist lives as a checkbox list in a tracked issue.\n\
                  `check` blocks the deploy while mandatory items for the target\n\
                  host are unresolved; `remind` lists deferred items afterwards."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default .relcheck.toml in the current directory
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Run the pre-deploy checklist check (blocks on unresolved mandatory tasks)
    Check {
        /// Release version being deployed (e.g. 2.14.3); without it the
        /// check is skipped
        #[arg(short, long)]
        tag: Option<String>,

        /// Deployment target host the checklist is filtered for
        #[arg(long)]
        host: String,
    },

    /// Show post-release tasks left pending by the last check
    Remind,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Command::Init { force } => commands::init(force, output_mode),
        Command::Check { tag, host } => commands::check(tag.as_deref(), &host, output_mode),
        Command::Remind => commands::remind(output_mode),
    }
}
