// Configuration loading

pub mod error;
pub mod store;
pub mod visibility;

use std::path::PathBuf;

pub use error::ConfigError;
pub use store::JsonFileStore;
pub use visibility::load_visibility;

/// Per-user config directory (`~/.config/debugkit` on Linux)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("debugkit")
}
