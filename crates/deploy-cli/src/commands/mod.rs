//! Command implementations for deploy-cli

pub mod update;

pub use update::{UpdateOptions, print_report, run_update};
