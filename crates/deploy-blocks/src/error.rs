//! Error types for deploy-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No `options:` block found")]
    BlockNotFound,

    #[error("Invalid option entry {value:?}: {reason}")]
    InvalidEntry { value: String, reason: String },
}
