//! Line-level change listing for rewrite previews

use similar::{ChangeTag, TextDiff};

/// A line added or removed by a rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineChange {
    Removed(String),
    Added(String),
}

/// Lists the lines that differ between `old` and `new`, in diff order.
pub fn changed_lines(old: &str, new: &str) -> Vec<LineChange> {
    if old == new {
        return Vec::new();
    }

    TextDiff::from_lines(old, new)
        .iter_all_changes()
        .filter_map(|change| {
            let text = change.value().trim_end_matches(['\n', '\r']).to_string();
            match change.tag() {
                ChangeTag::Delete => Some(LineChange::Removed(text)),
                ChangeTag::Insert => Some(LineChange::Added(text)),
                ChangeTag::Equal => None,
            }
        })
        .collect()
}
