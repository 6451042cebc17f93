//! Debug panel view model
//!
//! The host-facing surface: section/row counts and titles, descriptors by
//! index path or identifier, and edit dispatch. The visible registry is
//! computed once when the view model is built; rebuild to pick up a new
//! visibility config.

use crate::binding::{self, HostInfo};
use crate::consistency;
use crate::control::{ControlDescriptor, Edit, EditOutcome};
use crate::modes::TestAdsMode;
use crate::registry::{DebugItem, Section, REGISTRY};
use crate::store::PreferenceStore;
use crate::visibility::{build_visible_registry, VisibilityConfig, VisibleRegistry, VisibleSection};

/// Row address in the visible registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndexPath {
    pub section: usize,
    pub row: usize,
}

impl IndexPath {
    pub fn new(section: usize, row: usize) -> Self {
        Self { section, row }
    }
}

/// View model over a preference store
///
/// Owns its store; pass `&mut store` to lend one that must outlive the
/// panel.
pub struct DebugViewModel<S: PreferenceStore> {
    store: S,
    host: HostInfo,
    visible: VisibleRegistry,
}

impl<S: PreferenceStore> DebugViewModel<S> {
    /// Standard registry, fully visible
    pub fn new(store: S) -> Self {
        Self::with_registry(store, REGISTRY, None)
    }

    /// Standard registry filtered by `config` (None shows everything)
    pub fn with_visibility(store: S, config: Option<&VisibilityConfig>) -> Self {
        Self::with_registry(store, REGISTRY, config)
    }

    pub fn with_registry(
        store: S,
        registry: &[Section],
        config: Option<&VisibilityConfig>,
    ) -> Self {
        let visible = build_visible_registry(registry, config);
        log::debug!(
            "debug panel: {} sections, {} items visible",
            visible.len(),
            visible.item_count()
        );
        Self {
            store,
            host: HostInfo::default(),
            visible,
        }
    }

    /// Set the version the host reports for itself (App row fallback)
    pub fn with_host_version(mut self, version: impl Into<String>) -> Self {
        self.host.app_version = Some(version.into());
        self
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn visible(&self) -> &VisibleRegistry {
        &self.visible
    }

    // ========================================================================
    // Table queries
    // ========================================================================

    pub fn number_of_sections(&self) -> usize {
        self.visible.len()
    }

    /// Rows in `section`; 0 for an out-of-range section
    pub fn number_of_rows(&self, section: usize) -> usize {
        self.visible.section(section).map_or(0, |s| s.items.len())
    }

    pub fn title_for_section(&self, section: usize) -> Option<&'static str> {
        self.visible.section(section).map(|s| s.title)
    }

    pub fn sections(&self) -> &[VisibleSection] {
        self.visible.sections()
    }

    pub fn item_at(&self, path: IndexPath) -> Option<DebugItem> {
        self.visible
            .section(path.section)
            .and_then(|s| s.items.get(path.row))
            .copied()
    }

    /// Visible item with this identifier
    pub fn find(&self, identifier: &str) -> Option<DebugItem> {
        DebugItem::from_identifier(identifier).filter(|item| self.visible.contains(*item))
    }

    pub fn index_path_of(&self, item: DebugItem) -> Option<IndexPath> {
        self.visible
            .position(item)
            .map(|(section, row)| IndexPath::new(section, row))
    }

    // ========================================================================
    // Descriptors
    // ========================================================================

    pub fn descriptor(&self, item: DebugItem) -> ControlDescriptor {
        binding::describe(item, &self.store, &self.host)
    }

    pub fn descriptor_at(&self, path: IndexPath) -> Option<ControlDescriptor> {
        self.item_at(path).map(|item| self.descriptor(item))
    }

    /// Descriptors of every visible row, grouped by section title
    pub fn descriptors(&self) -> Vec<(&'static str, Vec<ControlDescriptor>)> {
        self.visible
            .sections()
            .iter()
            .map(|s| (s.title, s.items.iter().map(|item| self.descriptor(*item)).collect()))
            .collect()
    }

    // ========================================================================
    // Edits
    // ========================================================================

    pub fn apply_edit(&mut self, item: DebugItem, edit: Edit) -> EditOutcome {
        binding::apply(item, &mut self.store, edit)
    }

    /// Edit the row at `path`; ignored when the path is out of range
    pub fn apply_edit_at(&mut self, path: IndexPath, edit: Edit) -> EditOutcome {
        match self.item_at(path) {
            Some(item) => self.apply_edit(item, edit),
            None => EditOutcome::Ignored,
        }
    }

    /// Result of the choice offered after triggering the test ads mode row
    pub fn update_test_ads_mode(&mut self, mode: TestAdsMode) -> EditOutcome {
        consistency::select_test_ads_mode(&mut self.store, mode);
        EditOutcome::AppliedLinked
    }

    pub fn test_ads_mode(&self) -> TestAdsMode {
        consistency::test_ads_mode(&self.store)
    }
}
