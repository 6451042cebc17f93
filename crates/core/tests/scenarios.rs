// End-to-end panel scenarios through the public view model API.
// Run with: cargo test -p debugkit-core --test scenarios

use debugkit_core::keys;
use debugkit_core::{
    AdsInspectorTestMode, DebugItem, DebugViewModel, Edit, EditOutcome, IndexPath, MemoryStore,
    PreferenceStore, SettingKind, TestAdsMode, VisibilityConfig, REGISTRY,
};

fn section_titles<S: PreferenceStore>(vm: &DebugViewModel<S>) -> Vec<&'static str> {
    (0..vm.number_of_sections())
        .filter_map(|s| vm.title_for_section(s))
        .collect()
}

// -------------------------------------------------------------------------
// Scenario 1: empty store, no config
// -------------------------------------------------------------------------

#[test]
fn empty_store_without_config_is_fully_visible() {
    let vm = DebugViewModel::with_visibility(MemoryStore::new(), None);

    assert_eq!(vm.number_of_sections(), REGISTRY.len());
    for (i, section) in REGISTRY.iter().enumerate() {
        assert_eq!(vm.title_for_section(i), Some(section.title));
        assert_eq!(vm.number_of_rows(i), section.items.len());
    }

    let server = vm.descriptor_at(IndexPath::new(0, 0)).unwrap();
    assert_eq!(server.identifier, "server");
    assert_eq!(
        server.kind,
        SettingKind::Segmented {
            options: vec!["preprod", "prod"],
            selected: 1,
        }
    );
}

// -------------------------------------------------------------------------
// Scenario 2/3: mode linkage
// -------------------------------------------------------------------------

#[test]
fn yandex_sub_network_collapses_inspector_to_yandex() {
    let mut vm = DebugViewModel::new(MemoryStore::new());
    vm.update_test_ads_mode(TestAdsMode::YandexBigo);

    assert_eq!(
        keys::ADS_INSPECTOR_TEST_MODE.get(vm.store()).as_deref(),
        Some("yandex")
    );
    assert_eq!(
        vm.descriptor(DebugItem::TestAdsMode).kind,
        SettingKind::Action { label: "yandexBigo".into() }
    );
}

#[test]
fn inspector_admob_overrides_previous_sub_network() {
    let mut vm = DebugViewModel::new(MemoryStore::new());
    vm.update_test_ads_mode(TestAdsMode::YandexUnity);

    let path = vm.index_path_of(DebugItem::AdsInspectorTestMode).unwrap();
    let outcome = vm.apply_edit_at(path, Edit::Segment(AdsInspectorTestMode::AdMob.index()));

    assert_eq!(outcome, EditOutcome::AppliedLinked);
    assert_eq!(
        keys::TEST_ADS_MODE.get(vm.store()).as_deref(),
        Some("adMob")
    );
    assert_eq!(vm.test_ads_mode(), TestAdsMode::AdMob);
}

// -------------------------------------------------------------------------
// Scenario 4/5: visibility config
// -------------------------------------------------------------------------

#[test]
fn hidden_ads_section_is_excluded_from_counts() {
    let config: VisibilityConfig =
        serde_json::from_str(r#"{"sectionVisibility": {"Ads": false}}"#).unwrap();
    let vm = DebugViewModel::with_visibility(MemoryStore::new(), Some(&config));

    assert!(!section_titles(&vm).contains(&"Ads"));
    assert_eq!(vm.number_of_sections(), REGISTRY.len() - 1);
    let rows: usize = (0..vm.number_of_sections()).map(|s| vm.number_of_rows(s)).sum();
    assert_eq!(rows, 17 - 4);
    assert_eq!(vm.find("interstitialPerDay"), None);
}

#[test]
fn hidden_logs_item_keeps_general_order() {
    let config: VisibilityConfig =
        serde_json::from_str(r#"{"itemVisibility": {"General": {"logs": false}}}"#).unwrap();
    let vm = DebugViewModel::with_visibility(MemoryStore::new(), Some(&config));

    assert_eq!(vm.title_for_section(0), Some("General"));
    assert_eq!(vm.number_of_rows(0), 3);
    let ids: Vec<_> = (0..3)
        .map(|row| vm.item_at(IndexPath::new(0, row)).unwrap().identifier())
        .collect();
    assert_eq!(ids, vec!["server", "telegraph", "nodes"]);
}

// -------------------------------------------------------------------------
// Scenario 6: rejected numeric edit
// -------------------------------------------------------------------------

#[test]
fn garbage_interstitial_per_day_keeps_prior_value() {
    let mut vm = DebugViewModel::new(MemoryStore::new());

    let outcome = vm.apply_edit(DebugItem::InterstitialPerDay, Edit::Text("abc".into()));
    assert_eq!(outcome, EditOutcome::Ignored);
    assert_eq!(keys::INTERSTITIAL_PER_DAY.get(vm.store()), 100);

    vm.apply_edit(DebugItem::InterstitialPerDay, Edit::Text("5".into()));
    vm.apply_edit(DebugItem::InterstitialPerDay, Edit::Text("5x".into()));
    assert_eq!(keys::INTERSTITIAL_PER_DAY.get(vm.store()), 5);
}

// -------------------------------------------------------------------------
// Store lifetime
// -------------------------------------------------------------------------

#[test]
fn values_survive_view_model_rebuild() {
    let mut store = MemoryStore::new();
    {
        let mut vm = DebugViewModel::new(&mut store);
        vm.apply_edit(DebugItem::Server, Edit::Segment(0));
        vm.apply_edit(DebugItem::App, Edit::Text("7.0".into()));
    }

    let config = VisibilityConfig::default().hide_section("General");
    let vm = DebugViewModel::with_visibility(&mut store, Some(&config)).with_host_version("1.0");
    assert_eq!(vm.find("server"), None);
    assert_eq!(
        vm.descriptor(DebugItem::App).kind,
        SettingKind::Text { value: "7.0".into() }
    );
    assert!(keys::USE_PREPROD_SERVER_API.get(vm.store()));
}
