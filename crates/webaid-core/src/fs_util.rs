//! Idempotent directory creation.

use std::fs;
use std::io;
use std::path::Path;

use crate::UtilError;

/// Recursively create `path` and any missing ancestors.
///
/// Returns `Ok(true)` when the directory exists at the end of the call. If
/// creation fails, the path is checked again so a directory created
/// concurrently by someone else still counts as success; `Ok(false)` means
/// creation failed and there is still no directory. An error while checking
/// is returned as [`UtilError::Filesystem`]. An empty path names no
/// directory and gives `Ok(false)`.
pub fn create_dir(path: impl AsRef<Path>) -> Result<bool, UtilError> {
    create_dir_with_probe(path.as_ref(), dir_exists)
}

fn dir_exists(path: &Path) -> io::Result<bool> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

fn create_dir_with_probe<F>(path: &Path, probe: F) -> Result<bool, UtilError>
where
    F: FnOnce(&Path) -> io::Result<bool>,
{
    if path.as_os_str().is_empty() {
        return Ok(false);
    }
    let create_err = match fs::create_dir_all(path) {
        Ok(()) => return Ok(true),
        Err(e) => e,
    };
    tracing::debug!(path = %path.display(), "create_dir_all failed ({create_err}), re-checking");

    probe(path).map_err(|e| UtilError::Filesystem {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
