//! Options block rewriting.
//!
//! Renders a list of entries in the block's own indentation and splices it
//! over the existing entry lines. The `options:` key line and everything
//! outside the entry lines are left byte-identical.

use crate::error::{Error, Result};
use crate::parser::{OptionsBlock, find_options_block};

/// Outcome of rewriting an options block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The full content after the rewrite.
    pub content: String,
    /// The block as it was found before the rewrite.
    pub previous: OptionsBlock,
    /// Number of entry lines written, default entry included.
    pub entries_written: usize,
    /// Whether the content differs from the input.
    pub changed: bool,
}

/// Formats a single entry line, without line terminator.
///
/// The value is written as a YAML single-quoted scalar; embedded quotes are
/// doubled.
///
/// # Example
/// ```
/// use deploy_blocks::writer::format_entry;
///
/// assert_eq!(format_entry("    ", "v1.0.0"), "    - 'v1.0.0'");
/// assert_eq!(format_entry("  ", "it's"), "  - 'it''s'");
/// ```
pub fn format_entry(indent: &str, value: &str) -> String {
    format!("{}- '{}'", indent, value.replace('\'', "''"))
}

/// Renders entry lines, each followed by `newline`.
///
/// # Errors
/// Returns `Error::InvalidEntry` if a value spans more than one line.
pub fn render_entries<S: AsRef<str>>(indent: &str, entries: &[S], newline: &str) -> Result<String> {
    let mut rendered = String::new();
    for entry in entries {
        let value = entry.as_ref();
        if value.contains(['\n', '\r']) {
            return Err(Error::InvalidEntry {
                value: value.to_string(),
                reason: "entries must fit on a single line".to_string(),
            });
        }
        rendered.push_str(&format_entry(indent, value));
        rendered.push_str(newline);
    }
    Ok(rendered)
}

/// Replaces the entries of the first options block with `entries`.
///
/// # Errors
/// Returns `Error::BlockNotFound` if the content has no `options:` key line,
/// and `Error::InvalidEntry` for multi-line values. The content is not
/// touched in either case.
///
/// # Example
/// ```
/// use deploy_blocks::writer::replace_options_block;
///
/// let content = "      options:\n        - 'latest'\n        - 'v0.9.0'\n";
/// let rewrite = replace_options_block(content, &["latest", "v1.0.0"]).unwrap();
/// assert_eq!(rewrite.content, "      options:\n        - 'latest'\n        - 'v1.0.0'\n");
/// assert!(rewrite.changed);
/// ```
pub fn replace_options_block<S: AsRef<str>>(content: &str, entries: &[S]) -> Result<Rewrite> {
    let block = find_options_block(content).ok_or(Error::BlockNotFound)?;
    let rendered = render_entries(&block.entry_indent, entries, block.newline)?;

    let span = block.entries_span.clone();
    let mut new_content = String::with_capacity(content.len() - span.len() + rendered.len());
    new_content.push_str(&content[..span.start]);
    new_content.push_str(&rendered);
    new_content.push_str(&content[span.end..]);

    tracing::debug!(
        line = block.line,
        previous = block.entries.len(),
        written = entries.len(),
        "Rewrote options block"
    );

    Ok(Rewrite {
        changed: new_content != content,
        content: new_content,
        previous: block,
        entries_written: entries.len(),
    })
}
