//! Configuration-driven visibility
//!
//! A `VisibilityConfig` hides whole sections or single items by title and
//! identifier. Anything not mentioned is visible, and a missing config shows
//! everything: this is a developer panel, so hiding controls by accident is
//! worse than showing too many.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::registry::{DebugItem, Section};

/// Parsed visibility resource
///
/// ```json
/// {
///   "sectionVisibility": { "Ads": false },
///   "itemVisibility": { "General": { "logs": false } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VisibilityConfig {
    /// Section title -> visible
    pub section_visibility: HashMap<String, bool>,

    /// Section title -> item identifier -> visible
    pub item_visibility: HashMap<String, HashMap<String, bool>>,
}

impl VisibilityConfig {
    pub fn is_section_visible(&self, title: &str) -> bool {
        self.section_visibility.get(title).copied().unwrap_or(true)
    }

    pub fn is_item_visible(&self, section_title: &str, identifier: &str) -> bool {
        self.item_visibility
            .get(section_title)
            .and_then(|items| items.get(identifier))
            .copied()
            .unwrap_or(true)
    }

    pub fn hide_section(mut self, title: impl Into<String>) -> Self {
        self.section_visibility.insert(title.into(), false);
        self
    }

    pub fn hide_item(
        mut self,
        section_title: impl Into<String>,
        identifier: impl Into<String>,
    ) -> Self {
        self.item_visibility
            .entry(section_title.into())
            .or_default()
            .insert(identifier.into(), false);
        self
    }
}

/// A section as the host sees it, after filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleSection {
    pub title: &'static str,
    pub items: Vec<DebugItem>,
}

impl From<&Section> for VisibleSection {
    fn from(section: &Section) -> Self {
        Self {
            title: section.title,
            items: section.items.to_vec(),
        }
    }
}

/// Filtered registry. Sections with no visible items are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleRegistry {
    sections: Vec<VisibleSection>,
}

impl VisibleRegistry {
    pub fn sections(&self) -> &[VisibleSection] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&VisibleSection> {
        self.sections.get(index)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of visible items
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Section and row of an item, if visible
    pub fn position(&self, item: DebugItem) -> Option<(usize, usize)> {
        self.sections.iter().enumerate().find_map(|(section, s)| {
            s.items.iter().position(|i| *i == item).map(|row| (section, row))
        })
    }

    pub fn contains(&self, item: DebugItem) -> bool {
        self.position(item).is_some()
    }
}

/// Apply `config` to `registry`, preserving order. `None` shows everything.
pub fn build_visible_registry(
    registry: &[Section],
    config: Option<&VisibilityConfig>,
) -> VisibleRegistry {
    let Some(config) = config else {
        return VisibleRegistry {
            sections: registry.iter().map(VisibleSection::from).collect(),
        };
    };

    let sections = registry
        .iter()
        .filter(|section| config.is_section_visible(section.title))
        .map(|section| VisibleSection {
            title: section.title,
            items: section
                .items
                .iter()
                .copied()
                .filter(|item| config.is_item_visible(section.title, item.identifier()))
                .collect(),
        })
        .filter(|section| !section.items.is_empty())
        .collect();

    VisibleRegistry { sections }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ADS, GENERAL, POPUPS, REGISTRY, TIMINGS};

    fn titles(visible: &VisibleRegistry) -> Vec<&'static str> {
        visible.sections().iter().map(|s| s.title).collect()
    }

    #[test]
    fn test_no_config_is_identity() {
        let visible = build_visible_registry(REGISTRY, None);
        assert_eq!(visible.len(), REGISTRY.len());
        for (v, s) in visible.sections().iter().zip(REGISTRY) {
            assert_eq!(v.title, s.title);
            assert_eq!(v.items, s.items);
        }
    }

    #[test]
    fn test_empty_config_is_identity() {
        let config = VisibilityConfig::default();
        assert_eq!(
            build_visible_registry(REGISTRY, Some(&config)),
            build_visible_registry(REGISTRY, None)
        );
    }

    #[test]
    fn test_hidden_section_is_dropped() {
        let config = VisibilityConfig::default().hide_section(ADS);
        let visible = build_visible_registry(REGISTRY, Some(&config));
        assert!(!titles(&visible).contains(&ADS));
        assert_eq!(visible.len(), REGISTRY.len() - 1);
        assert!(!visible.contains(DebugItem::TestAdsMode));
    }

    #[test]
    fn test_hidden_item_preserves_order() {
        let config = VisibilityConfig::default().hide_item(GENERAL, "logs");
        let visible = build_visible_registry(REGISTRY, Some(&config));
        let general = visible.section(0).unwrap();
        assert_eq!(general.title, GENERAL);
        assert_eq!(
            general.items,
            vec![DebugItem::Server, DebugItem::Telegraph, DebugItem::Nodes]
        );
    }

    #[test]
    fn test_section_emptied_by_items_is_dropped() {
        let config = VisibilityConfig::default().hide_item(POPUPS, "popup");
        let visible = build_visible_registry(REGISTRY, Some(&config));
        assert_eq!(titles(&visible), vec![GENERAL, TIMINGS, ADS, "App"]);
    }

    #[test]
    fn test_explicit_true_and_unknown_keys_are_visible() {
        let mut config = VisibilityConfig::default();
        config.section_visibility.insert(GENERAL.into(), true);
        config.section_visibility.insert("Nope".into(), false);
        config.section_visibility.insert("ads".into(), false);
        config
            .item_visibility
            .entry(GENERAL.into())
            .or_default()
            .insert("Server".into(), false);

        let visible = build_visible_registry(REGISTRY, Some(&config));
        assert_eq!(visible, build_visible_registry(REGISTRY, None));
    }

    #[test]
    fn test_item_hidden_under_other_section_title_has_no_effect() {
        let config = VisibilityConfig::default().hide_item(ADS, "server");
        let visible = build_visible_registry(REGISTRY, Some(&config));
        assert!(visible.contains(DebugItem::Server));
    }

    #[test]
    fn test_position_lookup() {
        let config = VisibilityConfig::default().hide_section(POPUPS);
        let visible = build_visible_registry(REGISTRY, Some(&config));
        assert_eq!(visible.position(DebugItem::Server), Some((0, 0)));
        assert_eq!(visible.position(DebugItem::TestAdsMode), Some((2, 3)));
        assert_eq!(visible.position(DebugItem::Popup), None);
    }

    #[test]
    fn test_deserialize_partial_documents() {
        let config: VisibilityConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, VisibilityConfig::default());

        let config: VisibilityConfig =
            serde_json::from_str(r#"{"itemVisibility": {"General": {"logs": false}}}"#).unwrap();
        assert!(config.section_visibility.is_empty());
        assert!(!config.is_item_visible(GENERAL, "logs"));
        assert!(config.is_item_visible(GENERAL, "server"));
    }
}
