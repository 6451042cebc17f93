// Visibility config loading
// Loaded from ~/.config/debugkit/visibility.json (or any .json/.toml path)

use std::fs;
use std::path::{Path, PathBuf};

use debugkit_core::VisibilityConfig;

use crate::error::ConfigError;

/// Default location of the visibility resource
pub fn default_visibility_path() -> PathBuf {
    crate::config_dir().join("visibility.json")
}

pub fn from_json_str(input: &str) -> Result<VisibilityConfig, ConfigError> {
    serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// TOML form of the same document:
///
/// ```toml
/// [sectionVisibility]
/// Ads = false
///
/// [itemVisibility.General]
/// logs = false
/// ```
pub fn from_toml_str(input: &str) -> Result<VisibilityConfig, ConfigError> {
    toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))
}

/// Read and parse a config file, picking the format from its extension
pub fn read_visibility(path: &Path) -> Result<VisibilityConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => from_json_str(&contents),
        Some("toml") => from_toml_str(&contents),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Load a config file, or None if it is missing or broken.
///
/// None means "show everything". A broken file is logged rather than
/// surfaced so a packaging mistake never hides debug controls.
pub fn load_visibility(path: &Path) -> Option<VisibilityConfig> {
    if !path.exists() {
        log::debug!(
            "no visibility config at {}, showing all settings",
            path.display()
        );
        return None;
    }

    match read_visibility(path) {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("ignoring visibility config: {e}");
            None
        }
    }
}
