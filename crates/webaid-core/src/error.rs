//! Error type shared by the helper modules.

use std::path::PathBuf;

/// Errors surfaced by the helpers. Soft failures (absent values, unknown
/// interfaces) are `Option`s instead and never show up here.
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// A required argument was empty or falsy.
    #[error("{0} requires both a source and a property path")]
    MissingArgument(&'static str),

    /// Probing the file system failed after an unsuccessful create.
    #[error("file system error while checking {}: {message}", path.display())]
    Filesystem { path: PathBuf, message: String },

    /// A relative JSON path was given but no root directory is configured.
    #[error("relative path {} given but no JSON root is configured", .0.display())]
    NoRoot(PathBuf),

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
