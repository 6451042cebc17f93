//! File-backed preference store
//!
//! All keys live in one flat JSON object, stored by default in
//! `~/.config/debugkit/preferences.json`. Every write rewrites the file
//! (write-to-temp-then-rename), so a value is on disk as soon as `set_value`
//! returns.
//!
//! Entries are kept as raw JSON and typed per key on read. An entry no
//! setting can read (`null`, an array, a nested object) reads as absent but
//! is written back untouched. A file that cannot be read or is not a JSON
//! object is never overwritten; edits then only live in memory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use debugkit_core::{PrefValue, PreferenceStore};

use crate::error::ConfigError;

/// Default location of the preferences file
pub fn default_store_path() -> PathBuf {
    crate::config_dir().join("preferences.json")
}

/// Preference store persisted as a JSON object
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: Map<String, Value>,
    read_only: bool,
}

impl JsonFileStore {
    /// Open the store at `path`.
    ///
    /// A missing file yields an empty store. An unreadable or unparsable
    /// file also yields an empty store, opened read-only so the file on
    /// disk survives; settings errors must not keep the panel from opening.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let (values, read_only) = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Value>(&contents) {
                Ok(Value::Object(values)) => (values, false),
                Ok(_) => {
                    log::warn!(
                        "preferences {} is not a JSON object; changes will not be saved",
                        path.display()
                    );
                    (Map::new(), true)
                }
                Err(e) => {
                    log::warn!(
                        "ignoring unreadable preferences {}: {e}; changes will not be saved",
                        path.display()
                    );
                    (Map::new(), true)
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => (Map::new(), false),
            Err(e) => {
                log::warn!(
                    "cannot read preferences {}: {e}; changes will not be saved",
                    path.display()
                );
                (Map::new(), true)
            }
        };
        Self {
            path,
            values,
            read_only,
        }
    }

    /// Open the store at the default location
    pub fn open_default() -> Self {
        Self::open(default_store_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the file existed but could not be loaded
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Keys currently held, in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Write the current contents to disk
    pub fn save(&self) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::io(parent, e))?;
        }

        let json = serde_json::to_string_pretty(&self.values)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        let temp = self.path.with_extension("json.tmp");
        fs::write(&temp, json).map_err(|e| ConfigError::io(&temp, e))?;
        fs::rename(&temp, &self.path).map_err(|e| ConfigError::io(&self.path, e))
    }

    fn persist(&self) {
        if self.read_only {
            log::debug!("not saving {}: opened read-only", self.path.display());
            return;
        }
        if let Err(e) = self.save() {
            log::warn!("failed to save preferences: {e}");
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn value(&self, key: &str) -> Option<PrefValue> {
        let raw = self.values.get(key)?;
        serde_json::from_value(raw.clone())
            .map_err(|_| log::debug!("unusable stored value for '{key}': {raw}"))
            .ok()
    }

    fn set_value(&mut self, key: &str, value: PrefValue) {
        match serde_json::to_value(&value) {
            Ok(raw) => {
                self.values.insert(key.to_string(), raw);
                self.persist();
            }
            Err(e) => log::warn!("cannot store '{key}': {e}"),
        }
    }

    fn remove(&mut self, key: &str) {
        if self.values.remove(key).is_some() {
            self.persist();
        }
    }
}
