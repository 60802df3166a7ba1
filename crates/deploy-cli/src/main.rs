//! Deploy options CLI
//!
//! Regenerates the release picker of the deploy workflow from a list of
//! release identifiers.

mod cli;
mod commands;
mod error;

use std::path::Path;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use commands::UpdateOptions;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        match &e {
            CliError::Usage => print_usage(),
            _ if e.is_reported_on_stdout() => println!("{}: {}", "Error".red().bold(), e),
            _ => eprintln!("{}: {}", "error".red().bold(), e),
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let releases = cli.releases.as_deref().ok_or(CliError::Usage)?;
    let options = UpdateOptions {
        file: cli.file.clone(),
        default_entry: cli.default_entry.clone(),
        dry_run: cli.dry_run,
    };

    let report = commands::run_update(Path::new("."), releases, &options)?;
    commands::print_report(&report, cli.json)
}

fn print_usage() {
    let usage = Cli::command().render_usage();
    println!("{}", usage);
    println!("Example: update-deploy-options 'v1.0.0\\nv2.0.0\\nv3.0.0'");
    println!();
    println!("Run {} for all options.", "update-deploy-options --help".cyan());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_user() {
        let error = CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
        assert!(!error.is_reported_on_stdout());
    }

    #[test]
    fn test_usage_error_goes_to_stdout() {
        assert!(CliError::Usage.is_reported_on_stdout());
    }

    #[test]
    fn test_missing_file_message_names_path() {
        let error = CliError::from(deploy_fs::Error::NotFound {
            path: deploy_fs::DEPLOY_WORKFLOW.into(),
        });
        assert_eq!(
            error.to_string(),
            ".github/workflows/deploy-server.yml not found"
        );
        assert!(error.is_reported_on_stdout());
    }

    #[test]
    fn test_rewrite_error_goes_to_stderr() {
        let error = CliError::Rewrite {
            path: "deploy.yml".into(),
            source: deploy_blocks::Error::BlockNotFound,
        };
        assert_eq!(error.to_string(), "deploy.yml: No `options:` block found");
        assert!(!error.is_reported_on_stdout());
    }
}
