// DebugKit CLI - headless host for the developer debug panel

mod exit_codes;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use debugkit_config::{load_visibility, visibility, JsonFileStore};
use debugkit_core::{DebugItem, DebugViewModel, Edit, EditOutcome, SettingKind, TestAdsMode};

use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};
use render::{descriptor_line, SectionOutput};

#[derive(Parser)]
#[command(name = "debugkit")]
#[command(about = "Developer debug settings (headless panel)")]
#[command(version)]
struct Cli {
    /// Preferences file [default: ~/.config/debugkit/preferences.json]
    #[arg(long, global = true, env = "DEBUGKIT_STORE")]
    store: Option<PathBuf>,

    /// Visibility config, .json or .toml [default: ~/.config/debugkit/visibility.json]
    #[arg(long, global = true, env = "DEBUGKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Version the host app reports, shown when no override is stored
    #[arg(long, global = true)]
    app_version: Option<String>,

    /// Log store writes and config fallbacks to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List visible sections and their current values
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show one setting
    Get {
        /// Setting identifier (e.g. server, timeLife, testAdsMode)
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// Change one setting
    #[command(after_help = "\
Examples:
  debugkit set server preprod
  debugkit set server 1
  debugkit set telegraph off
  debugkit set timeLife 3600
  debugkit set adsInspectorTestMode adMob
  debugkit set testAdsMode yandexBigo")]
    Set {
        id: String,
        value: String,
    },

    /// List the choices an action setting offers
    Options {
        id: String,
    },

    /// Confirm changes (they take effect on next app launch)
    Apply,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    let store_path = cli.store.unwrap_or_else(debugkit_config::store::default_store_path);
    let config_path = cli.config.unwrap_or_else(visibility::default_visibility_path);
    log::debug!(
        "store: {}, config: {}",
        store_path.display(),
        config_path.display()
    );

    let store = JsonFileStore::open(store_path);
    let config = load_visibility(&config_path);
    let mut vm = DebugViewModel::with_visibility(store, config.as_ref());
    if let Some(version) = cli.app_version {
        vm = vm.with_host_version(version);
    }

    let result = match cli.command {
        Commands::List { json } => cmd_list(&vm, json),
        Commands::Get { id, json } => cmd_get(&vm, &id, json),
        Commands::Set { id, value } => cmd_set(&mut vm, &id, &value),
        Commands::Options { id } => cmd_options(&mut vm, &id),
        Commands::Apply => cmd_apply(),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self { code: EXIT_USAGE, message: msg.into(), hint: None }
    }

    pub fn rejected(id: &str, value: &str) -> Self {
        Self {
            code: EXIT_ERROR,
            message: format!("{id}: value '{value}' rejected, setting unchanged"),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

type Panel = DebugViewModel<JsonFileStore>;

fn resolve(vm: &Panel, id: &str) -> Result<DebugItem, CliError> {
    vm.find(id).ok_or_else(|| {
        let hint = if DebugItem::from_identifier(id).is_some() {
            "setting is hidden by the visibility config"
        } else {
            "run `debugkit list` to see available settings"
        };
        CliError::usage(format!("unknown setting '{id}'")).with_hint(hint)
    })
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|e| CliError {
        code: EXIT_ERROR,
        message: e.to_string(),
        hint: None,
    })
}

// ============================================================================
// list / get
// ============================================================================

fn cmd_list(vm: &Panel, json: bool) -> Result<(), CliError> {
    let sections = vm.descriptors();

    if json {
        let out: Vec<SectionOutput> = sections
            .iter()
            .map(|(title, items)| SectionOutput { title, items })
            .collect();
        println!("{}", to_json(&out)?);
        return Ok(());
    }

    for (i, (title, items)) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{title}");
        for d in items {
            println!("{}", descriptor_line(d));
        }
    }
    Ok(())
}

fn cmd_get(vm: &Panel, id: &str, json: bool) -> Result<(), CliError> {
    let d = vm.descriptor(resolve(vm, id)?);
    if json {
        println!("{}", to_json(&d)?);
    } else {
        println!("{}", descriptor_line(&d));
    }
    Ok(())
}

// ============================================================================
// set / options
// ============================================================================

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn cmd_set(vm: &mut Panel, id: &str, value: &str) -> Result<(), CliError> {
    let item = resolve(vm, id)?;

    let outcome = match vm.descriptor(item).kind {
        SettingKind::Segmented { options, .. } => {
            // Accept either the label or its index
            let index = options
                .iter()
                .position(|o| *o == value)
                .or_else(|| value.parse().ok());
            match index {
                Some(index) => vm.apply_edit(item, Edit::Segment(index)),
                None => EditOutcome::Ignored,
            }
        }
        SettingKind::Toggle { .. } => match parse_switch(value) {
            Some(on) => vm.apply_edit(item, Edit::Toggle(on)),
            None => EditOutcome::Ignored,
        },
        SettingKind::Text { .. } => vm.apply_edit(item, Edit::Text(value.to_string())),
        SettingKind::Action { .. } => match vm.apply_edit(item, Edit::Trigger) {
            EditOutcome::ChooseTestAdsMode(choices) => {
                match choices.iter().find(|m| m.as_str() == value) {
                    Some(mode) => vm.update_test_ads_mode(*mode),
                    None => EditOutcome::Ignored,
                }
            }
            other => other,
        },
    };

    if !outcome.is_applied() {
        let err = CliError::rejected(id, value);
        return Err(match segment_or_choice_hint(vm, item) {
            Some(hint) => err.with_hint(hint),
            None => err,
        });
    }

    println!("{}", descriptor_line(&vm.descriptor(item)));
    if outcome.needs_reload() {
        for linked in [DebugItem::AdsInspectorTestMode, DebugItem::TestAdsMode] {
            if linked != item && vm.index_path_of(linked).is_some() {
                println!("{}", descriptor_line(&vm.descriptor(linked)));
            }
        }
    }
    Ok(())
}

fn segment_or_choice_hint(vm: &Panel, item: DebugItem) -> Option<String> {
    match vm.descriptor(item).kind {
        SettingKind::Segmented { options, .. } => {
            Some(format!("expected one of: {}", options.join(", ")))
        }
        SettingKind::Toggle { .. } => Some("expected on or off".to_string()),
        SettingKind::Action { .. } => {
            Some(format!("expected one of: {}", mode_list(&TestAdsMode::ALL)))
        }
        SettingKind::Text { .. } => None,
    }
}

fn mode_list(modes: &[TestAdsMode]) -> String {
    modes.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ")
}

fn cmd_options(vm: &mut Panel, id: &str) -> Result<(), CliError> {
    let item = resolve(vm, id)?;
    match vm.apply_edit(item, Edit::Trigger) {
        EditOutcome::ChooseTestAdsMode(choices) => {
            let current = vm.test_ads_mode();
            for mode in choices {
                let marker = if *mode == current { "*" } else { " " };
                println!("{marker} {mode}");
            }
            Ok(())
        }
        _ => Err(
            CliError::usage(format!("'{id}' is not an action setting"))
                .with_hint("use `debugkit get` to see its value"),
        ),
    }
}

// ============================================================================
// apply
// ============================================================================

fn cmd_apply() -> Result<(), CliError> {
    println!("Applied! Restart app to see changes.");
    Ok(())
}
