//! Per-setting read/write dispatch
//!
//! `describe` reads the store and builds the descriptor for an item; `apply`
//! validates an edit and writes it back. Both dispatch on the same
//! `DebugItem`. Segmented items go through `segment_options` in both
//! directions, so a segment index always means the label shown at it.

use crate::consistency;
use crate::control::{ControlDescriptor, Edit, EditOutcome, SettingKind};
use crate::keys;
use crate::modes::{AdsInspectorTestMode, TestAdsMode};
use crate::registry::DebugItem;
use crate::store::{PrefKey, PreferenceStore};

const PREPROD: &str = "preprod";
const PROD: &str = "prod";

/// Server segment labels
pub const SERVER_OPTIONS: [&str; 2] = [PREPROD, PROD];

/// Host facts some bindings fall back on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInfo {
    /// Version the host application reports for itself
    pub app_version: Option<String>,
}

/// Ordered option labels of a segmented item, None for other kinds
pub fn segment_options(item: DebugItem) -> Option<&'static [&'static str]> {
    match item {
        DebugItem::Server => Some(&SERVER_OPTIONS),
        DebugItem::AdsInspectorTestMode => Some(&AdsInspectorTestMode::TAGS),
        _ => None,
    }
}

fn segment_tag(item: DebugItem, index: usize) -> Option<&'static str> {
    segment_options(item)?.get(index).copied()
}

fn toggle_key(item: DebugItem) -> Option<PrefKey<bool>> {
    match item {
        DebugItem::Telegraph => Some(keys::USE_TELEGRAPH),
        DebugItem::Nodes => Some(keys::LOAD_SERVERS_FROM_NODES),
        DebugItem::Logs => Some(keys::LOGS_TO_CONSOLE),
        DebugItem::Popup => Some(keys::TEST_SHOW_POPUP),
        _ => None,
    }
}

fn duration_key(item: DebugItem) -> Option<PrefKey<f64>> {
    match item {
        DebugItem::Timing(field) => Some(field.key()),
        DebugItem::InterstitialInterval => Some(keys::INTERSTITIAL_INTERVAL),
        _ => None,
    }
}

/// Version shown in the App row: override, else host version, else "0"
pub fn effective_app_version<S: PreferenceStore + ?Sized>(store: &S, host: &HostInfo) -> String {
    keys::OVERRIDE_APP_VERSION
        .get(store)
        .or_else(|| host.app_version.clone())
        .unwrap_or_else(|| keys::FALLBACK_APP_VERSION.to_string())
}

/// Read the current value of `item` as a control descriptor
pub fn describe<S: PreferenceStore + ?Sized>(
    item: DebugItem,
    store: &S,
    host: &HostInfo,
) -> ControlDescriptor {
    let kind = match item {
        DebugItem::Server | DebugItem::AdsInspectorTestMode => {
            let options = segment_options(item).unwrap_or_default();
            let current = match item {
                DebugItem::Server if keys::USE_PREPROD_SERVER_API.get(store) => PREPROD,
                DebugItem::Server => PROD,
                _ => consistency::inspector_mode(store).as_str(),
            };
            SettingKind::Segmented {
                options: options.to_vec(),
                selected: options.iter().position(|o| *o == current).unwrap_or_default(),
            }
        }
        DebugItem::Telegraph | DebugItem::Nodes | DebugItem::Logs | DebugItem::Popup => {
            let value = toggle_key(item).map(|key| key.get(store)).unwrap_or_default();
            SettingKind::Toggle { value }
        }
        DebugItem::Timing(_) | DebugItem::InterstitialInterval => {
            let seconds = duration_key(item).map(|key| key.get(store)).unwrap_or_default();
            SettingKind::Text {
                value: format_seconds(seconds),
            }
        }
        DebugItem::InterstitialPerDay => SettingKind::Text {
            value: keys::INTERSTITIAL_PER_DAY.get(store).to_string(),
        },
        DebugItem::TestAdsMode => SettingKind::Action {
            label: consistency::test_ads_mode(store).as_str().to_string(),
        },
        DebugItem::App => SettingKind::Text {
            value: effective_app_version(store, host),
        },
    };

    ControlDescriptor {
        identifier: item.identifier(),
        title: item.title(),
        kind,
    }
}

/// Validate `edit` for `item` and write it. Invalid edits change nothing.
pub fn apply<S: PreferenceStore + ?Sized>(
    item: DebugItem,
    store: &mut S,
    edit: Edit,
) -> EditOutcome {
    let outcome = match (item, edit) {
        (DebugItem::Server, Edit::Segment(index)) => match segment_tag(item, index) {
            Some(tag) => {
                keys::USE_PREPROD_SERVER_API.set(store, tag == PREPROD);
                EditOutcome::Applied
            }
            None => EditOutcome::Ignored,
        },
        (DebugItem::AdsInspectorTestMode, Edit::Segment(index)) => {
            match segment_tag(item, index).and_then(AdsInspectorTestMode::from_tag) {
                Some(mode) => {
                    consistency::select_inspector_mode(store, mode);
                    EditOutcome::AppliedLinked
                }
                None => EditOutcome::Ignored,
            }
        }
        (
            DebugItem::Telegraph | DebugItem::Nodes | DebugItem::Logs | DebugItem::Popup,
            Edit::Toggle(on),
        ) => {
            match toggle_key(item) {
                Some(key) => {
                    key.set(store, on);
                    EditOutcome::Applied
                }
                None => EditOutcome::Ignored,
            }
        }
        (DebugItem::Timing(_) | DebugItem::InterstitialInterval, Edit::Text(text)) => {
            match (duration_key(item), parse_seconds(&text)) {
                (Some(key), Some(seconds)) => {
                    key.set(store, seconds);
                    EditOutcome::Applied
                }
                _ => EditOutcome::Ignored,
            }
        }
        (DebugItem::InterstitialPerDay, Edit::Text(text)) => match parse_count(&text) {
            Some(count) => {
                keys::INTERSTITIAL_PER_DAY.set(store, count);
                EditOutcome::Applied
            }
            None => EditOutcome::Ignored,
        },
        (DebugItem::App, Edit::Text(text)) => {
            keys::OVERRIDE_APP_VERSION.set(store, Some(text));
            EditOutcome::Applied
        }
        (DebugItem::TestAdsMode, Edit::Trigger) => {
            EditOutcome::ChooseTestAdsMode(&TestAdsMode::ALL)
        }
        _ => EditOutcome::Ignored,
    };

    match &outcome {
        EditOutcome::Ignored => log::debug!("ignored edit for '{}'", item.identifier()),
        EditOutcome::Applied | EditOutcome::AppliedLinked => {
            log::debug!("updated '{}'", item.identifier())
        }
        EditOutcome::ChooseTestAdsMode(_) => {}
    }
    outcome
}

/// Integer display of a duration, truncated toward zero
pub fn format_seconds(seconds: f64) -> String {
    (seconds.trunc() as i64).to_string()
}

/// Decimal duration; `,` is accepted as the decimal separator
pub fn parse_seconds(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
}

fn parse_count(text: &str) -> Option<i64> {
    text.trim().parse().ok()
}
