//! Options block parsing.
//!
//! Recognizes an `options:` key line followed by zero or more quoted list
//! entries:
//! ```text
//!         options:
//!           - 'latest'
//!           - 'v1.0.0'
//! ```

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

/// Regex for an `options:` key line and the entry lines directly below it.
///
/// Entry values are YAML single-quoted scalars, so a doubled `''` is part of
/// the value. The last entry may end at end of input without a newline.
static OPTIONS_BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^(?P<key>(?P<key_indent>[ \t]*)options:[ \t]*(?P<newline>\r?\n))(?P<entries>(?:[ \t]+- '(?:[^'\r\n]|'')*'[ \t]*(?:\r?\n|\z))*)",
    )
    .expect("Invalid options block regex")
});

/// Regex for a single entry line inside a matched block.
static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<indent>[ \t]+)- '(?P<value>(?:[^'\r\n]|'')*)'")
        .expect("Invalid entry regex")
});

/// A located options block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionsBlock {
    /// Leading whitespace used for entry lines.
    ///
    /// Taken from the first existing entry; for an empty block it is the key
    /// indent plus two spaces.
    pub entry_indent: String,
    /// Line terminator of the key line, reused for rendered entries.
    pub newline: &'static str,
    /// Unquoted entry values in file order.
    pub entries: Vec<String>,
    /// Byte range of the entry lines, trailing line terminator included.
    pub entries_span: Range<usize>,
    /// 1-based line number of the `options:` key line.
    pub line: usize,
}

/// Finds the first options block in the content.
///
/// Returns `None` when no `options:` key line exists. A key line with no
/// entries below it still yields a block, with an empty entry list.
///
/// # Example
/// ```
/// use deploy_blocks::parser::find_options_block;
///
/// let content = "      options:\n        - 'latest'\n        - 'v1.0.0'\n";
/// let block = find_options_block(content).unwrap();
/// assert_eq!(block.entries, ["latest", "v1.0.0"]);
/// assert_eq!(block.entry_indent, "        ");
/// ```
pub fn find_options_block(content: &str) -> Option<OptionsBlock> {
    let caps = OPTIONS_BLOCK_REGEX.captures(content)?;
    let key = caps.name("key")?;
    let entries_match = caps.name("entries")?;
    let key_indent = caps.name("key_indent").map_or("", |m| m.as_str());
    let newline = match caps.name("newline").map(|m| m.as_str()) {
        Some("\r\n") => "\r\n",
        _ => "\n",
    };

    let mut entries = Vec::new();
    let mut entry_indent = None;
    for line in entries_match.as_str().lines() {
        if let Some(entry) = ENTRY_REGEX.captures(line) {
            if entry_indent.is_none() {
                entry_indent = entry.name("indent").map(|m| m.as_str().to_string());
            }
            if let Some(value) = entry.name("value") {
                entries.push(unquote(value.as_str()));
            }
        }
    }

    let entry_indent = entry_indent.unwrap_or_else(|| format!("{}  ", key_indent));
    let line = content[..key.start()].lines().count() + 1;

    tracing::debug!(line, entries = entries.len(), "Found options block");

    Some(OptionsBlock {
        entry_indent,
        newline,
        entries,
        entries_span: entries_match.range(),
        line,
    })
}

fn unquote(value: &str) -> String {
    value.replace("''", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_block() {
        assert!(find_options_block("name: Deploy\non: push\n").is_none());
    }

    #[test]
    fn test_block_with_entries() {
        let content = "x:\n  options:\n    - 'latest'\n    - 'v1'\ny: 1\n";
        let block = find_options_block(content).unwrap();
        assert_eq!(block.entries, ["latest", "v1"]);
        assert_eq!(block.entry_indent, "    ");
        assert_eq!(block.line, 2);
        assert_eq!(
            &content[block.entries_span.clone()],
            "    - 'latest'\n    - 'v1'\n"
        );
    }

    #[test]
    fn test_empty_block_defaults_indent() {
        let content = "        options:\n        default: 'latest'\n";
        let block = find_options_block(content).unwrap();
        assert!(block.entries.is_empty());
        assert_eq!(block.entry_indent, " ".repeat(10));
        assert_eq!(block.entries_span.start, block.entries_span.end);
    }

    #[test]
    fn test_doubled_quote_is_unescaped() {
        let content = "options:\n  - 'it''s'\n";
        let block = find_options_block(content).unwrap();
        assert_eq!(block.entries, ["it's"]);
    }

    #[test]
    fn test_last_entry_without_newline() {
        let content = "options:\n  - 'latest'\n  - 'v1'";
        let block = find_options_block(content).unwrap();
        assert_eq!(block.entries, ["latest", "v1"]);
        assert_eq!(block.entries_span.end, content.len());
    }

    #[test]
    fn test_crlf_block() {
        let content = "options:\r\n  - 'latest'\r\n  - 'v1'\r\nnext: 1\r\n";
        let block = find_options_block(content).unwrap();
        assert_eq!(block.newline, "\r\n");
        assert_eq!(block.entries, ["latest", "v1"]);
    }

    #[test]
    fn test_commented_key_is_ignored() {
        assert!(find_options_block("# options:\n#  - 'x'\n").is_none());
    }

    #[test]
    fn test_first_block_wins() {
        let content = "a:\n  options:\n    - 'one'\nb:\n  options:\n    - 'two'\n";
        let block = find_options_block(content).unwrap();
        assert_eq!(block.entries, ["one"]);
        assert_eq!(block.line, 2);
    }
}
