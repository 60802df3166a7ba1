//! [`WorkflowFixture`] builder for rewrite scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use deploy_fs::DEPLOY_WORKFLOW;
use tempfile::TempDir;

/// A deploy workflow with a manual release picker, shaped like the real one.
pub const SAMPLE_WORKFLOW: &str = r#"name: Deploy Server

on:
  workflow_dispatch:
    inputs:
      release:
        description: 'Release to deploy'
        required: true
        type: choice
        options:
          - 'latest'
          - 'v0.9.0'
        default: 'latest'

jobs:
  deploy:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - run: ./scripts/deploy.sh "${{ inputs.release }}"
"#;

/// A temporary checkout directory, optionally holding the deploy workflow.
///
/// # Example
///
/// ```rust,no_run
/// use deploy_test_utils::WorkflowFixture;
///
/// let fixture = WorkflowFixture::with_sample();
/// fixture.assert_workflow_contains("- 'v0.9.0'");
/// ```
pub struct WorkflowFixture {
    temp_dir: TempDir,
}

impl Default for WorkflowFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowFixture {
    /// Create an empty checkout with no workflow file.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a checkout holding [`SAMPLE_WORKFLOW`].
    pub fn with_sample() -> Self {
        Self::with_workflow(SAMPLE_WORKFLOW)
    }

    /// Create a checkout holding a workflow with the given content.
    pub fn with_workflow(content: &str) -> Self {
        let fixture = Self::new();
        fixture.write_workflow(content);
        fixture
    }

    /// Root of the checkout.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of the deploy workflow inside the checkout.
    pub fn workflow_path(&self) -> PathBuf {
        self.root().join(DEPLOY_WORKFLOW)
    }

    /// Write the deploy workflow, creating `.github/workflows` as needed.
    pub fn write_workflow(&self, content: &str) {
        let path = self.workflow_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
    }

    /// Current content of the deploy workflow.
    ///
    /// # Panics
    /// Panics if the workflow cannot be read.
    pub fn read_workflow(&self) -> String {
        let path = self.workflow_path();
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read workflow: {}", path.display()))
    }

    /// Assert that the checkout holds no deploy workflow.
    pub fn assert_workflow_missing(&self) {
        let path = self.workflow_path();
        assert!(!path.exists(), "Expected no workflow at {}", path.display());
    }

    /// Assert that the deploy workflow contains `content`.
    pub fn assert_workflow_contains(&self, content: &str) {
        let workflow = self.read_workflow();
        assert!(
            workflow.contains(content),
            "Workflow does not contain expected content.\nExpected: {}\nActual: {}",
            content,
            workflow
        );
    }

    /// List every file name under the checkout, for detecting stray writes.
    pub fn file_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        collect_names(self.root(), self.root(), &mut names);
        names.sort();
        names
    }
}

fn collect_names(root: &Path, dir: &Path, names: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_dir() {
            collect_names(root, &path, names);
        } else if let Ok(relative) = path.strip_prefix(root) {
            names.push(relative.to_string_lossy().replace('\\', "/"));
        }
    }
}
