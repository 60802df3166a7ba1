//! Well-known location of the deploy workflow.

/// Path of the deploy workflow, relative to the repository root.
pub const DEPLOY_WORKFLOW: &str = ".github/workflows/deploy-server.yml";
