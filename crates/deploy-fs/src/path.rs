//! Normalized path handling for workflow locations

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Workflow paths are written with forward slashes in configuration and on
/// the command line. This keeps them comparable and printable the same way
/// on every platform, converting to a native path only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Resolve `relative` against `root`.
    ///
    /// An absolute `relative` is returned unchanged.
    pub fn resolve(root: impl AsRef<Path>, relative: impl AsRef<Path>) -> Self {
        let relative = relative.as_ref();
        if relative.is_absolute() {
            Self::new(relative)
        } else {
            Self::new(root).join(&relative.to_string_lossy())
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let segment = segment.trim_start_matches("./");
        let joined = if self.inner.is_empty() || self.inner == "." {
            segment.to_string()
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment)
        } else {
            format!("{}/{}", self.inner, segment)
        };
        Self { inner: joined }
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
