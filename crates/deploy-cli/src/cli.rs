//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use deploy_blocks::DEFAULT_ENTRY;
use deploy_fs::DEPLOY_WORKFLOW;

/// Regenerate the release options of the deploy workflow
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "update-deploy-options")]
#[command(author, version, about)]
#[command(after_help = "Example:\n  update-deploy-options \"$(git tag --list 'v*' --sort=-v:refname)\"")]
pub struct Cli {
    /// Newline-separated release identifiers
    #[arg(value_name = "RELEASES")]
    pub releases: Option<String>,

    /// Workflow file to rewrite, relative to the current directory
    #[arg(short, long, env = "DEPLOY_OPTIONS_FILE", default_value = DEPLOY_WORKFLOW)]
    pub file: PathBuf,

    /// Entry always listed first
    #[arg(long, env = "DEPLOY_OPTIONS_DEFAULT", default_value = DEFAULT_ENTRY)]
    pub default_entry: String,

    /// Show the changes without writing the file
    #[arg(long)]
    pub dry_run: bool,

    /// Output the result as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
