//! Error types for deploy-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// No releases argument was given
    #[error("missing RELEASES argument")]
    Usage,

    /// Error from deploy-fs
    #[error(transparent)]
    Fs(#[from] deploy_fs::Error),

    /// The workflow content could not be rewritten
    #[error("{path}: {source}")]
    Rewrite {
        path: PathBuf,
        #[source]
        source: deploy_blocks::Error,
    },

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Whether the message belongs on stdout rather than stderr.
    ///
    /// Usage and missing-workflow messages are part of the tool's normal
    /// output contract; everything else is a diagnostic.
    pub fn is_reported_on_stdout(&self) -> bool {
        match self {
            Self::Usage => true,
            Self::Fs(e) => e.is_not_found(),
            _ => false,
        }
    }
}
