//! Preference store abstraction
//!
//! Every setting reads and writes through a `PreferenceStore`. The store is a
//! flat key-value map of loosely typed `PrefValue`s; typing happens at read
//! time through `PrefKey<T>`, which also carries the per-key default.
//!
//! Reads never fail. A missing key, or a stored value that cannot be read as
//! the requested type, yields the declared default.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A raw stored value.
///
/// Serialized untagged so a JSON-backed store holds plain scalars:
/// `true`, `100`, `7200.0`, `"noTest"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrefValue {
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
}

/// Typed key-value persistence.
///
/// Implementations must make `set_value` visible to the next `value` call
/// on the same store.
pub trait PreferenceStore {
    /// Raw stored value, or None if the key was never written
    fn value(&self, key: &str) -> Option<PrefValue>;

    /// Store a value, replacing whatever was there
    fn set_value(&mut self, key: &str, value: PrefValue);

    /// Remove a key so that reads fall back to the default again
    fn remove(&mut self, key: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn value(&self, key: &str) -> Option<PrefValue> {
        (**self).value(key)
    }

    fn set_value(&mut self, key: &str, value: PrefValue) {
        (**self).set_value(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn value(&self, key: &str) -> Option<PrefValue> {
        (**self).value(key)
    }

    fn set_value(&mut self, key: &str, value: PrefValue) {
        (**self).set_value(key, value)
    }

    fn remove(&mut self, key: &str) {
        (**self).remove(key)
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// Process-local store backed by a `HashMap`.
///
/// Used by tests and by hosts that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, PrefValue>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently written
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn value(&self, key: &str) -> Option<PrefValue> {
        self.values.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: PrefValue) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

// ============================================================================
// Typed access
// ============================================================================

/// A type that can be read from and written to the store.
pub trait PrefType: Sized {
    /// Interpret a stored value. None means "unreadable, use the default".
    fn decode(value: &PrefValue) -> Option<Self>;

    /// Value to store. None removes the key.
    fn encode(self) -> Option<PrefValue>;
}

impl PrefType for bool {
    fn decode(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Bool(b) => Some(*b),
            PrefValue::Int(i) => Some(*i != 0),
            PrefValue::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "1" => Some(true),
                "false" | "no" | "0" => Some(false),
                _ => None,
            },
            PrefValue::Double(_) => None,
        }
    }

    fn encode(self) -> Option<PrefValue> {
        Some(PrefValue::Bool(self))
    }
}

impl PrefType for i64 {
    fn decode(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Int(i) => Some(*i),
            PrefValue::Double(d) if d.is_finite() && d.fract() == 0.0 => Some(*d as i64),
            PrefValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn encode(self) -> Option<PrefValue> {
        Some(PrefValue::Int(self))
    }
}

impl PrefType for f64 {
    fn decode(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::Double(d) if d.is_finite() => Some(*d),
            PrefValue::Int(i) => Some(*i as f64),
            PrefValue::String(s) => s.trim().parse::<f64>().ok().filter(|d| d.is_finite()),
            _ => None,
        }
    }

    fn encode(self) -> Option<PrefValue> {
        Some(PrefValue::Double(self))
    }
}

impl PrefType for Option<String> {
    fn decode(value: &PrefValue) -> Option<Self> {
        match value {
            PrefValue::String(s) => Some(Some(s.clone())),
            _ => None,
        }
    }

    fn encode(self) -> Option<PrefValue> {
        self.map(PrefValue::String)
    }
}

/// Declaration of one persisted value: store key plus default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefKey<T: 'static> {
    pub name: &'static str,
    pub default: T,
}

impl<T: 'static> PrefKey<T> {
    pub const fn new(name: &'static str, default: T) -> Self {
        Self { name, default }
    }
}

impl<T: PrefType + Clone + 'static> PrefKey<T> {
    /// Read the value, falling back to the default when missing or malformed
    pub fn get<S: PreferenceStore + ?Sized>(&self, store: &S) -> T {
        store
            .value(self.name)
            .and_then(|raw| {
                let decoded = T::decode(&raw);
                if decoded.is_none() {
                    log::debug!("ignoring malformed value for '{}': {:?}", self.name, raw);
                }
                decoded
            })
            .unwrap_or_else(|| self.default.clone())
    }

    pub fn set<S: PreferenceStore + ?Sized>(&self, store: &mut S, value: T) {
        match value.encode() {
            Some(raw) => store.set_value(self.name, raw),
            None => store.remove(self.name),
        }
    }
}
