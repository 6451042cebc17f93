//! Static settings catalog
//!
//! The registry is fixed at build time: sections in display order, each with
//! its items in display order. Runtime visibility is layered on top by
//! `visibility::build_visible_registry` and never mutates this table.

use std::fmt;

use crate::keys;
use crate::store::PrefKey;

/// Duration-valued settings in the Timings section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeField {
    TimeLife,
    TimeLifeAdsServer,
    TimeActiveFeedback,
    TimerBackgroundFeedback,
    TimeForceCancelWait,
    TimeForcePositiveWait,
    TimeDay,
}

impl TimeField {
    pub const ALL: [TimeField; 7] = [
        Self::TimeLife,
        Self::TimeLifeAdsServer,
        Self::TimeActiveFeedback,
        Self::TimerBackgroundFeedback,
        Self::TimeForceCancelWait,
        Self::TimeForcePositiveWait,
        Self::TimeDay,
    ];

    /// Identifier, also used as the row title
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TimeLife => "timeLife",
            Self::TimeLifeAdsServer => "timeLifeAdsServer",
            Self::TimeActiveFeedback => "timeActiveFeedback",
            Self::TimerBackgroundFeedback => "timerBackgroundFeedback",
            Self::TimeForceCancelWait => "timeForceCancelWait",
            Self::TimeForcePositiveWait => "timeForcePositiveWait",
            Self::TimeDay => "timeDay",
        }
    }

    /// Backing store key. Two fields are stored under longer names.
    pub fn key(&self) -> PrefKey<f64> {
        match self {
            Self::TimeLife => keys::TIME_LIFE,
            Self::TimeLifeAdsServer => keys::TIME_LIFE_ADS_SERVER,
            Self::TimeActiveFeedback => keys::TIME_ACTIVE_WAITING_FEEDBACK,
            Self::TimerBackgroundFeedback => keys::TIME_BACKGROUND_WAITING_FEEDBACK,
            Self::TimeForceCancelWait => keys::TIME_FORCE_CANCEL_WAIT,
            Self::TimeForcePositiveWait => keys::TIME_FORCE_POSITIVE_WAIT,
            Self::TimeDay => keys::TIME_DAY,
        }
    }
}

/// One row of the debug panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugItem {
    Server,
    Telegraph,
    Nodes,
    Logs,
    Popup,
    Timing(TimeField),
    InterstitialPerDay,
    InterstitialInterval,
    AdsInspectorTestMode,
    TestAdsMode,
    App,
}

impl DebugItem {
    /// Stable identifier, unique across the registry
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Telegraph => "telegraph",
            Self::Nodes => "nodes",
            Self::Logs => "logs",
            Self::Popup => "popup",
            Self::Timing(field) => field.as_str(),
            Self::InterstitialPerDay => "interstitialPerDay",
            Self::InterstitialInterval => "interstitialInterval",
            Self::AdsInspectorTestMode => "adsInspectorTestMode",
            Self::TestAdsMode => "testAdsMode",
            Self::App => "app",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Server => "Server",
            Self::Telegraph => "Telegraph",
            Self::Nodes => "Load servers from nodes",
            Self::Logs => "Logs to console",
            Self::Popup => "Show popup",
            Self::Timing(field) => field.as_str(),
            Self::InterstitialPerDay => "Interstitial per day",
            Self::InterstitialInterval => "Interstitial interval",
            Self::AdsInspectorTestMode => "Ads inspector",
            Self::TestAdsMode => "Test ads mode",
            Self::App => "Version",
        }
    }

    /// Look up an item of the standard registry by identifier (case-sensitive)
    pub fn from_identifier(id: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .flat_map(|section| section.items.iter())
            .copied()
            .find(|item| item.identifier() == id)
    }
}

impl fmt::Display for DebugItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// A named, ordered group of items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub items: &'static [DebugItem],
}

pub const GENERAL: &str = "General";
pub const POPUPS: &str = "Popups";
pub const TIMINGS: &str = "Timings";
pub const ADS: &str = "Ads";
pub const APP: &str = "App";

/// The full catalog in display order
pub const REGISTRY: &[Section] = &[
    Section {
        title: GENERAL,
        items: &[DebugItem::Server, DebugItem::Telegraph, DebugItem::Nodes, DebugItem::Logs],
    },
    Section {
        title: POPUPS,
        items: &[DebugItem::Popup],
    },
    Section {
        title: TIMINGS,
        items: &[
            DebugItem::Timing(TimeField::TimeLife),
            DebugItem::Timing(TimeField::TimeLifeAdsServer),
            DebugItem::Timing(TimeField::TimeActiveFeedback),
            DebugItem::Timing(TimeField::TimerBackgroundFeedback),
            DebugItem::Timing(TimeField::TimeForceCancelWait),
            DebugItem::Timing(TimeField::TimeForcePositiveWait),
            DebugItem::Timing(TimeField::TimeDay),
        ],
    },
    Section {
        title: ADS,
        items: &[
            DebugItem::InterstitialPerDay,
            DebugItem::InterstitialInterval,
            DebugItem::AdsInspectorTestMode,
            DebugItem::TestAdsMode,
        ],
    },
    Section {
        title: APP,
        items: &[DebugItem::App],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identifiers_unique_across_registry() {
        let ids: Vec<_> = REGISTRY
            .iter()
            .flat_map(|s| s.items.iter())
            .map(|i| i.identifier())
            .collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(ids.len(), 17);
    }

    #[test]
    fn test_section_titles_unique() {
        let titles: HashSet<_> = REGISTRY.iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), REGISTRY.len());
    }

    #[test]
    fn test_timings_section_lists_every_field_in_order() {
        let timings = REGISTRY.iter().find(|s| s.title == TIMINGS).unwrap();
        let fields: Vec<_> = timings
            .items
            .iter()
            .map(|item| match item {
                DebugItem::Timing(field) => *field,
                other => panic!("unexpected item {other} in Timings"),
            })
            .collect();
        assert_eq!(fields, TimeField::ALL.to_vec());
    }

    #[test]
    fn test_from_identifier() {
        assert_eq!(
            DebugItem::from_identifier("server"),
            Some(DebugItem::Server)
        );
        assert_eq!(
            DebugItem::from_identifier("timerBackgroundFeedback"),
            Some(DebugItem::Timing(TimeField::TimerBackgroundFeedback))
        );
        assert_eq!(DebugItem::from_identifier("Server"), None);
        assert_eq!(DebugItem::from_identifier("missing"), None);
    }

    #[test]
    fn test_time_field_keys() {
        assert_eq!(
            TimeField::TimeActiveFeedback.key().name,
            "timeForActiveWaitingFeedback"
        );
        assert_eq!(
            TimeField::TimerBackgroundFeedback.key().name,
            "timeForBackgroundWaitingFeedback"
        );
        assert_eq!(TimeField::TimeDay.key().default, 86_400.0);
    }
}
