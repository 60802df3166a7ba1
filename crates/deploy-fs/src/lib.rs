//! Filesystem access for the deploy options rewriter
//!
//! Provides normalized path handling, the fixed workflow location and
//! whole-file text I/O with atomic replacement.

pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::DEPLOY_WORKFLOW;
pub use error::{Error, Result};
pub use path::NormalizedPath;
