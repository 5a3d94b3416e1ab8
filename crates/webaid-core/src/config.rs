use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Interface names tried, in order, when no explicit interface is requested
/// or the requested one does not exist.
pub const DEFAULT_INTERFACE_CANDIDATES: [&str; 3] = ["eth0", "无线网络连接", "本地连接"];

/// Global configuration loaded from `~/.config/webaid/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebaidConfig {
    /// Root directory for relative JSON lookup paths. Without it, relative
    /// paths resolve to nothing.
    pub json_root: Option<PathBuf>,
    /// Fallback interface names for local address discovery.
    pub interface_candidates: Vec<String>,
    /// Create `json_root` (recursively) before lookups if it is missing.
    pub create_missing_json_root: bool,
}

impl Default for WebaidConfig {
    fn default() -> Self {
        Self {
            json_root: None,
            interface_candidates: DEFAULT_INTERFACE_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            create_missing_json_root: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("webaid")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WebaidConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] but for an explicit config file location.
pub fn load_or_init_at(path: &Path) -> Result<WebaidConfig> {
    if !path.exists() {
        let default_cfg = WebaidConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: WebaidConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
