//! Options block parsing and rewriting for CI workflow files.
//!
//! A workflow with a manual trigger offers its selectable releases as a
//! quoted list under an `options:` key:
//!
//! ```text
//!       release:
//!         type: choice
//!         options:
//!           - 'latest'
//!           - 'v0.9.0'
//! ```
//!
//! This crate finds that list by pattern and replaces its entries, leaving
//! every other byte of the file alone. The file is never parsed as YAML, so
//! comments, ordering and formatting elsewhere survive the rewrite.
//!
//! - [`releases`] turns caller input into an ordered list of entries
//! - [`parser`] locates the first options block and reads its entries
//! - [`writer`] renders entries and splices them into the content
//! - [`diff`] reports which lines a rewrite changes
//!
//! Everything here operates on strings; reading and writing the workflow
//! file is left to the caller.

pub mod diff;
pub mod error;
pub mod parser;
pub mod releases;
pub mod writer;

pub use diff::{LineChange, changed_lines};
pub use error::{Error, Result};
pub use parser::{OptionsBlock, find_options_block};
pub use releases::{DEFAULT_ENTRY, ReleaseList};
pub use writer::{Rewrite, format_entry, render_entries, replace_options_block};
