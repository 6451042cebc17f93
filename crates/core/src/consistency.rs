//! Test ads mode / inspector mode linkage
//!
//! The two modes are persisted under separate keys but must satisfy
//! `inspector == test_ads.collapse()` after every write made through this
//! module. Both entry points write the pair back to back.

use crate::keys;
use crate::modes::{AdsInspectorTestMode, TestAdsMode};
use crate::store::PreferenceStore;

/// Current test ads mode; unset or unknown tags read as `noTest`
pub fn test_ads_mode<S: PreferenceStore + ?Sized>(store: &S) -> TestAdsMode {
    match keys::TEST_ADS_MODE.get(store) {
        Some(tag) => TestAdsMode::from_tag(&tag).unwrap_or_else(|| {
            log::debug!("unknown test ads mode '{tag}', reading as noTest");
            TestAdsMode::NoTest
        }),
        None => TestAdsMode::NoTest,
    }
}

/// Current inspector mode; unset or unknown tags read as `noTest`
pub fn inspector_mode<S: PreferenceStore + ?Sized>(store: &S) -> AdsInspectorTestMode {
    match keys::ADS_INSPECTOR_TEST_MODE.get(store) {
        Some(tag) => AdsInspectorTestMode::from_tag(&tag).unwrap_or_else(|| {
            log::debug!("unknown inspector mode '{tag}', reading as noTest");
            AdsInspectorTestMode::NoTest
        }),
        None => AdsInspectorTestMode::NoTest,
    }
}

/// Inspector picked directly. The test ads mode is reset to the bare tag,
/// dropping any Yandex sub-network choice.
pub fn select_inspector_mode<S: PreferenceStore + ?Sized>(
    store: &mut S,
    mode: AdsInspectorTestMode,
) {
    let test_mode = TestAdsMode::from(mode);
    keys::ADS_INSPECTOR_TEST_MODE.set(store, Some(mode.as_str().to_string()));
    keys::TEST_ADS_MODE.set(store, Some(test_mode.as_str().to_string()));
    log::debug!("inspector mode -> {mode}, test ads mode -> {test_mode}");
}

/// Test ads mode picked from the full list. The inspector follows its
/// collapsed value.
pub fn select_test_ads_mode<S: PreferenceStore + ?Sized>(store: &mut S, mode: TestAdsMode) {
    let inspector = mode.collapse();
    keys::TEST_ADS_MODE.set(store, Some(mode.as_str().to_string()));
    keys::ADS_INSPECTOR_TEST_MODE.set(store, Some(inspector.as_str().to_string()));
    log::debug!("test ads mode -> {mode}, inspector mode -> {inspector}");
}

/// Whether the stored pair satisfies the linkage (as read, with fallbacks)
pub fn is_consistent<S: PreferenceStore + ?Sized>(store: &S) -> bool {
    inspector_mode(store) == test_ads_mode(store).collapse()
}
