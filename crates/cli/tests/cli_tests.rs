// Integration tests for the `debugkit` binary.
// Run with: cargo test -p debugkit-cli --test cli_tests -- --nocapture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    fn store_path(&self) -> PathBuf {
        self.dir.path().join("preferences.json")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("visibility.json")
    }

    fn write_config(&self, json: &str) {
        fs::write(self.config_path(), json).unwrap();
    }

    fn run(&self, args: &[&str]) -> Output {
        debugkit(&self.store_path(), &self.config_path())
            .args(args)
            .output()
            .expect("run debugkit")
    }

    fn stored(&self) -> serde_json::Value {
        let json = fs::read_to_string(self.store_path()).unwrap();
        serde_json::from_str(&json).unwrap()
    }
}

fn debugkit(store: &Path, config: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_debugkit"));
    cmd.arg("--store").arg(store);
    cmd.arg("--config").arg(config);
    cmd.env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn list_json(env: &Env) -> Vec<serde_json::Value> {
    let output = env.run(&["list", "--json"]);
    assert!(output.status.success(), "exit code was {:?}", output.status);
    serde_json::from_str(&stdout(&output)).expect("valid JSON array")
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_without_config_shows_every_section() {
    let env = Env::new();
    let sections = list_json(&env);

    let titles: Vec<_> = sections.iter().map(|s| s["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["General", "Popups", "Timings", "Ads", "App"]);

    let server = &sections[0]["items"][0];
    assert_eq!(server["identifier"], "server");
    assert_eq!(server["kind"], "segmented");
    assert_eq!(server["options"], serde_json::json!(["preprod", "prod"]));
    assert_eq!(server["selected"], 1);

    // Listing never writes
    assert!(!env.store_path().exists());
}

#[test]
fn list_honours_visibility_config() {
    let env = Env::new();
    env.write_config(
        r#"{"sectionVisibility": {"Ads": false}, "itemVisibility": {"General": {"logs": false}}}"#,
    );

    let sections = list_json(&env);
    let titles: Vec<_> = sections.iter().map(|s| s["title"].as_str().unwrap()).collect();
    assert!(!titles.contains(&"Ads"));
    assert_eq!(sections[0]["items"].as_array().unwrap().len(), 3);
}

#[test]
fn broken_config_fails_open() {
    let env = Env::new();
    env.write_config("{ sectionVisibility");
    assert_eq!(list_json(&env).len(), 5);
}

#[test]
fn list_text_output() {
    let env = Env::new();
    let output = env.run(&["--app-version", "3.4.5", "list"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("preprod [prod]"), "{text}");
    assert!(text.contains("\"3.4.5\""), "{text}");
}

// ---------------------------------------------------------------------------
// set / get
// ---------------------------------------------------------------------------

#[test]
fn set_segment_by_label_and_index() {
    let env = Env::new();

    assert!(env.run(&["set", "server", "preprod"]).status.success());
    assert_eq!(env.stored()["isUsePreProdServerApi"], true);

    assert!(env.run(&["set", "server", "1"]).status.success());
    assert_eq!(env.stored()["isUsePreProdServerApi"], false);
}

#[test]
fn set_toggle_and_timing() {
    let env = Env::new();
    assert!(env.run(&["set", "telegraph", "off"]).status.success());
    assert!(env.run(&["set", "timeLife", "3600"]).status.success());

    let stored = env.stored();
    assert_eq!(stored["isUseTelegraph"], false);
    assert_eq!(stored["timeLife"], 3600.0);

    let output = env.run(&["get", "timeLife", "--json"]);
    let d: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(d["value"], "3600");
}

#[test]
fn rejected_edit_exits_1_and_keeps_value() {
    let env = Env::new();
    assert!(
        env.run(&["set", "interstitialPerDay", "12"]).status.success()
    );

    let output = env.run(&["set", "interstitialPerDay", "abc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("unchanged")
    );
    assert_eq!(env.stored()["interstitialPerDay"], 12);
}

#[test]
fn test_ads_mode_choice_syncs_inspector() {
    let env = Env::new();
    let output = env.run(&["set", "testAdsMode", "yandexBigo"]);
    assert!(output.status.success());

    let stored = env.stored();
    assert_eq!(stored["testAdsMode"], "yandexBigo");
    assert_eq!(stored["adsInspectorTestMode"], "yandex");

    let output = env.run(&["set", "adsInspectorTestMode", "adMob"]);
    assert!(output.status.success());
    assert_eq!(env.stored()["testAdsMode"], "adMob");
}

#[test]
fn unknown_test_ads_mode_is_rejected() {
    let env = Env::new();
    let output = env.run(&["set", "testAdsMode", "yandexFoo"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!env.store_path().exists());
}

#[test]
fn options_lists_choices_with_current_marked() {
    let env = Env::new();
    env.run(&["set", "testAdsMode", "yandexUnity"]);

    let output = env.run(&["options", "testAdsMode"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 9);
    assert!(text.lines().any(|l| l == "* yandexUnity"), "{text}");

    let output = env.run(&["options", "server"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn hidden_or_unknown_setting_is_usage_error() {
    let env = Env::new();
    env.write_config(r#"{"itemVisibility": {"App": {"app": false}}}"#);

    let output = env.run(&["get", "app"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("hidden"));

    let output = env.run(&["set", "nope", "1"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn apply_prints_restart_notice() {
    let env = Env::new();
    let output = env.run(&["apply"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "Applied! Restart app to see changes."
    );
}
