//! Shared test utilities for the deploy-options workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`workflow`] — [`WorkflowFixture`] lays out a checkout with a deploy
//!   workflow in a temporary directory

pub mod workflow;

pub use workflow::{SAMPLE_WORKFLOW, WorkflowFixture};
