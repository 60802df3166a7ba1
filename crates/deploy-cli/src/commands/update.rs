//! Update command implementation
//!
//! Rewrites the options block of the deploy workflow with a new release list.

use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::Serialize;

use deploy_blocks::{LineChange, ReleaseList, changed_lines, replace_options_block};
use deploy_fs::{NormalizedPath, io};

use crate::error::{CliError, Result};

/// Settings for a single update run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOptions {
    /// Workflow file, relative to the root unless absolute
    pub file: PathBuf,
    /// Entry always listed first
    pub default_entry: String,
    /// Compute the rewrite without writing it
    pub dry_run: bool,
}

/// What an update run did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateReport {
    pub path: String,
    pub releases: Vec<String>,
    pub releases_written: usize,
    pub previous: Vec<String>,
    pub changed: bool,
    pub written: bool,
    pub dry_run: bool,
    /// Changed lines prefixed with `-` or `+`
    pub diff: Vec<String>,
}

/// Run the update command
///
/// Reads the workflow, replaces its first options block with the default
/// entry plus `releases`, and writes it back unless nothing changed or
/// `dry_run` is set. The file is never touched on failure.
pub fn run_update(root: &Path, releases: &str, options: &UpdateOptions) -> Result<UpdateReport> {
    let default_entry = options.default_entry.trim();
    if default_entry.is_empty() {
        return Err(CliError::user("default entry must not be empty"));
    }

    let path = NormalizedPath::resolve(root, &options.file);
    let releases = ReleaseList::parse(releases);
    tracing::debug!(path = %path, releases = releases.len(), "Updating deploy options");

    let content = io::read_text(&path)?;
    let rewrite = replace_options_block(&content, &releases.entries(default_entry)).map_err(
        |source| CliError::Rewrite {
            path: path.to_native(),
            source,
        },
    )?;

    let written = rewrite.changed && !options.dry_run;
    if written {
        io::write_text(&path, &rewrite.content)?;
    } else {
        tracing::debug!(changed = rewrite.changed, "Skipping write");
    }

    let diff = changed_lines(&content, &rewrite.content)
        .into_iter()
        .map(|change| match change {
            LineChange::Removed(text) => format!("-{}", text),
            LineChange::Added(text) => format!("+{}", text),
        })
        .collect();

    Ok(UpdateReport {
        path: path.as_str().to_string(),
        releases: releases.as_slice().to_vec(),
        releases_written: releases.len(),
        previous: rewrite.previous.entries,
        changed: rewrite.changed,
        written,
        dry_run: options.dry_run,
        diff,
    })
}

/// Print an update report as prose or JSON
///
/// The release count excludes blank input lines and the default entry.
pub fn print_report(report: &UpdateReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    if report.dry_run {
        for line in &report.diff {
            if line.starts_with('-') {
                println!("{}", line.red());
            } else {
                println!("{}", line.green());
            }
        }
        println!(
            "[dry-run] Would update {} with {} releases",
            report.path, report.releases_written
        );
        return Ok(());
    }

    if report.changed {
        println!(
            "{} Updated {} with {} releases",
            "OK".green().bold(),
            report.path,
            report.releases_written
        );
    } else {
        println!(
            "{} Updated {} with {} releases (no changes)",
            "OK".green().bold(),
            report.path,
            report.releases_written
        );
    }

    Ok(())
}
