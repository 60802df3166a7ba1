//! Whole-file text I/O with atomic replacement

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::{Error, NormalizedPath, Result};

/// Read the full text content of an existing file.
///
/// A missing file is reported as [`Error::NotFound`] so callers can tell it
/// apart from other I/O faults.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    let content = fs::read_to_string(&native_path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: native_path.clone(),
        },
        _ => Error::io(&native_path, e),
    })?;
    tracing::debug!(path = %path, bytes = content.len(), "Read file");
    Ok(content)
}

/// Replace a file's content atomically.
///
/// The content goes to a temp file in the same directory, which is locked,
/// flushed and then renamed over the target. A failure at any step leaves the
/// target untouched. Permissions of an existing target carry over.
///
/// A symlinked target is followed, so the file it points to is replaced and
/// the link stays. A read-only target is refused with a permission error.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = resolve_target(&path.to_native())?;

    if let Ok(metadata) = fs::metadata(&native_path)
        && metadata.permissions().readonly()
    {
        return Err(Error::io(
            &native_path,
            std::io::Error::from(ErrorKind::PermissionDenied),
        ));
    }

    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let result = write_temp(&temp_path, &native_path, content)
        .and_then(|()| fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    tracing::debug!(path = %path, bytes = content.len(), "Wrote file");
    Ok(())
}

/// Follow symlinks to the file that actually gets replaced.
///
/// A target that does not exist yet is written where it was named.
fn resolve_target(native_path: &Path) -> Result<PathBuf> {
    match fs::canonicalize(native_path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(native_path.to_path_buf()),
        Err(e) => Err(Error::io(native_path, e)),
    }
}

fn write_temp(temp_path: &Path, native_path: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.to_path_buf(),
    })?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    if let Ok(metadata) = fs::metadata(native_path) {
        fs::set_permissions(temp_path, metadata.permissions())
            .map_err(|e| Error::io(temp_path, e))?;
    }

    temp_file.unlock().map_err(|_| Error::LockFailed {
        path: native_path.to_path_buf(),
    })?;

    Ok(())
}

/// Write text content to a file atomically.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}
