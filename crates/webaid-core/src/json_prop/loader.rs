//! Sources for property lookup: in-memory values or JSON files under a root directory.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::get_property;
use crate::config::WebaidConfig;
use crate::UtilError;

/// Where a lookup reads its JSON from.
#[derive(Debug, Clone, Copy)]
pub enum JsonSource<'a> {
    Value(&'a Value),
    File(&'a Path),
}

impl<'a> From<&'a Value> for JsonSource<'a> {
    fn from(value: &'a Value) -> Self {
        JsonSource::Value(value)
    }
}

impl<'a> From<&'a Path> for JsonSource<'a> {
    fn from(path: &'a Path) -> Self {
        JsonSource::File(path)
    }
}

impl<'a> From<&'a str> for JsonSource<'a> {
    fn from(path: &'a str) -> Self {
        JsonSource::File(Path::new(path))
    }
}

/// Loads JSON files and runs dotted lookups on them.
///
/// Relative file paths are joined onto `root`; with no root they cannot be
/// loaded. Absolute paths are used as-is.
#[derive(Debug, Clone, Default)]
pub struct JsonLoader {
    root: Option<PathBuf>,
}

impl JsonLoader {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    pub fn from_config(cfg: &WebaidConfig) -> Self {
        Self::new(cfg.json_root.clone())
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Absolute location of `file`, or `None` if it is relative and no root is set.
    pub fn locate(&self, file: &Path) -> Option<PathBuf> {
        if file.is_absolute() {
            Some(file.to_path_buf())
        } else {
            self.root.as_ref().map(|root| root.join(file))
        }
    }

    /// Read and parse a JSON file. Errors are returned, not swallowed.
    pub fn load(&self, file: &Path) -> Result<Value, UtilError> {
        let path = self
            .locate(file)
            .ok_or_else(|| UtilError::NoRoot(file.to_path_buf()))?;
        let data = fs::read_to_string(&path).map_err(|source| UtilError::Io {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| UtilError::Json { path, source })
    }

    /// Look up `property` in `source`.
    ///
    /// An empty property string, an empty file path or a falsy in-memory
    /// value is a [`UtilError::MissingArgument`]. Files that cannot be
    /// located, read or parsed yield `Ok(None)`, as does a source that is
    /// not an object or array.
    pub fn get_json_prop<'a>(
        &self,
        source: impl Into<JsonSource<'a>>,
        property: &str,
    ) -> Result<Option<Value>, UtilError> {
        let source = source.into();
        if property.is_empty() {
            return Err(UtilError::MissingArgument("get_json_prop"));
        }

        match source {
            JsonSource::Value(value) => {
                if !super::is_truthy(value) {
                    return Err(UtilError::MissingArgument("get_json_prop"));
                }
                Ok(lookup(value, property))
            }
            JsonSource::File(file) => {
                if file.as_os_str().is_empty() {
                    return Err(UtilError::MissingArgument("get_json_prop"));
                }
                match self.load(file) {
                    Ok(value) => Ok(lookup(&value, property)),
                    Err(err) => {
                        tracing::warn!(
                            file = %file.display(),
                            root = ?self.root(),
                            "JSON lookup source unavailable: {err}"
                        );
                        Ok(None)
                    }
                }
            }
        }
    }
}

fn lookup(value: &Value, property: &str) -> Option<Value> {
    if !(value.is_object() || value.is_array()) {
        return None;
    }
    get_property(value, property).cloned()
}
