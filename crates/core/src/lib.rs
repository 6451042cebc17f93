//! `debugkit-core`: settings registry for the developer debug panel.
//!
//! Pure logic crate: a static catalog of settings, visibility filtering,
//! control descriptors and the test-ads/inspector mode linkage, all over an
//! injected `PreferenceStore`. No file IO; see `debugkit-config` for a
//! file-backed store and config loading.

pub mod binding;
pub mod consistency;
pub mod control;
pub mod keys;
pub mod modes;
pub mod registry;
pub mod store;
pub mod view_model;
pub mod visibility;

pub use binding::HostInfo;
pub use control::{ControlDescriptor, Edit, EditOutcome, SettingKind};
pub use modes::{AdsInspectorTestMode, TestAdsMode};
pub use registry::{DebugItem, Section, TimeField, REGISTRY};
pub use store::{MemoryStore, PrefKey, PrefType, PrefValue, PreferenceStore};
pub use view_model::{DebugViewModel, IndexPath};
pub use visibility::{build_visible_registry, VisibilityConfig, VisibleRegistry, VisibleSection};
