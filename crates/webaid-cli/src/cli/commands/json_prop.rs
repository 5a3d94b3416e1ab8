//! `webaid json-prop <file> <property>` – dotted lookup in a JSON file.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use webaid_core::config::WebaidConfig;
use webaid_core::fs_util::create_dir;
use webaid_core::json_prop::JsonLoader;

/// Print the value as JSON, or nothing if the lookup found no value.
pub fn run_json_prop(
    cfg: &WebaidConfig,
    file: &Path,
    property: &str,
    root: Option<PathBuf>,
) -> Result<()> {
    let root = root.or_else(|| cfg.json_root.clone());
    if let Some(dir) = root.as_deref().filter(|_| cfg.create_missing_json_root) {
        if !create_dir(dir)? {
            tracing::warn!("could not create JSON root {}", dir.display());
        }
    }

    let loader = JsonLoader::new(root);
    let value = loader
        .get_json_prop(file, property)
        .with_context(|| format!("lookup of `{property}` in {}", file.display()))?;
    if let Some(value) = value {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
