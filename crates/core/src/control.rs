//! UI-agnostic control descriptors
//!
//! The host turns a `ControlDescriptor` into a widget and feeds user input
//! back as an `Edit`. Nothing here knows how controls are drawn.

use serde::Serialize;

use crate::modes::TestAdsMode;

/// Interaction shape of a setting, with its current value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SettingKind {
    /// Choice among fixed, ordered labels
    Segmented { options: Vec<&'static str>, selected: usize },
    Toggle { value: bool },
    Text { value: String },
    /// Stateless button; `label` shows the current value
    Action { label: String },
}

impl SettingKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Segmented { .. } => "segmented",
            Self::Toggle { .. } => "toggle",
            Self::Text { .. } => "text",
            Self::Action { .. } => "action",
        }
    }
}

/// Everything the host needs to render one row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlDescriptor {
    pub identifier: &'static str,
    pub title: &'static str,
    #[serde(flatten)]
    pub kind: SettingKind,
}

/// Raw user input for one control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Segment tapped, by index into the descriptor's options
    Segment(usize),
    Toggle(bool),
    /// Text field contents after the change
    Text(String),
    /// Action button tapped
    Trigger,
}

/// What happened to an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Value written
    Applied,
    /// Value written and linked settings were re-synchronized; other rows
    /// may have changed
    AppliedLinked,
    /// Nothing written (unparsable, out of range, or wrong edit for the kind)
    Ignored,
    /// The host should offer these modes and report the pick through
    /// `DebugViewModel::update_test_ads_mode`
    ChooseTestAdsMode(&'static [TestAdsMode]),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied | Self::AppliedLinked)
    }

    /// Whether rows other than the edited one may need redrawing
    pub fn needs_reload(&self) -> bool {
        matches!(self, Self::AppliedLinked)
    }
}
