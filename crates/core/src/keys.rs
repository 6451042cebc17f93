//! Persistence key space
//!
//! One `PrefKey` per persisted value, with the default a reader sees when
//! nothing (or nothing readable) was stored. Durations are in seconds.

use crate::store::PrefKey;

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;

// ============================================================================
// Flags
// ============================================================================

/// true = preprod API, false = prod
pub const USE_PREPROD_SERVER_API: PrefKey<bool> = PrefKey::new("isUsePreProdServerApi", false);
pub const USE_TELEGRAPH: PrefKey<bool> = PrefKey::new("isUseTelegraph", true);
pub const LOAD_SERVERS_FROM_NODES: PrefKey<bool> = PrefKey::new("loadServersFromNodes", false);
pub const TEST_SHOW_POPUP: PrefKey<bool> = PrefKey::new("testShowPopup", false);
pub const LOGS_TO_CONSOLE: PrefKey<bool> = PrefKey::new("logsToConsole", false);

// ============================================================================
// Timings
// ============================================================================

pub const TIME_LIFE: PrefKey<f64> = PrefKey::new("timeLife", 2.0 * HOUR);
pub const TIME_LIFE_ADS_SERVER: PrefKey<f64> = PrefKey::new("timeLifeAdsServer", 15.0 * MINUTE);
pub const TIME_ACTIVE_WAITING_FEEDBACK: PrefKey<f64> =
    PrefKey::new("timeForActiveWaitingFeedback", 20.0 * MINUTE);
pub const TIME_BACKGROUND_WAITING_FEEDBACK: PrefKey<f64> =
    PrefKey::new("timeForBackgroundWaitingFeedback", 120.0 * MINUTE);
pub const TIME_FORCE_CANCEL_WAIT: PrefKey<f64> = PrefKey::new("timeForceCancelWait", 2.0 * DAY);
pub const TIME_FORCE_POSITIVE_WAIT: PrefKey<f64> =
    PrefKey::new("timeForcePositiveWait", 90.0 * DAY);
pub const TIME_DAY: PrefKey<f64> = PrefKey::new("timeDay", DAY);

// ============================================================================
// Ads
// ============================================================================

pub const INTERSTITIAL_PER_DAY: PrefKey<i64> = PrefKey::new("interstitialPerDay", 100);
pub const INTERSTITIAL_INTERVAL: PrefKey<f64> = PrefKey::new("interstitialInterval", 0.0);

/// Raw `AdsInspectorTestMode` tag; unset reads as `noTest`
pub const ADS_INSPECTOR_TEST_MODE: PrefKey<Option<String>> =
    PrefKey::new("adsInspectorTestMode", None);

/// Raw `TestAdsMode` tag; unset reads as `noTest`
pub const TEST_ADS_MODE: PrefKey<Option<String>> = PrefKey::new("testAdsMode", None);

// ============================================================================
// App
// ============================================================================

pub const OVERRIDE_APP_VERSION: PrefKey<Option<String>> = PrefKey::new("overrideAppVersion", None);

/// Version shown when neither an override nor a host version exists
pub const FALLBACK_APP_VERSION: &str = "0";
