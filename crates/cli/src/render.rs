// Text and JSON rendering of control descriptors

use serde::Serialize;

use debugkit_core::{ControlDescriptor, SettingKind};

/// One section in `list --json` output
#[derive(Debug, Serialize)]
pub struct SectionOutput<'a> {
    pub title: &'a str,
    pub items: &'a [ControlDescriptor],
}

/// Current value as shown in a terminal
pub fn value_text(kind: &SettingKind) -> String {
    match kind {
        SettingKind::Segmented { options, selected } => options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                if i == *selected {
                    format!("[{option}]")
                } else {
                    option.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        SettingKind::Toggle { value } => (if *value { "on" } else { "off" }).to_string(),
        SettingKind::Text { value } => format!("\"{value}\""),
        SettingKind::Action { label } => format!("{label} (choose)"),
    }
}

pub fn descriptor_line(d: &ControlDescriptor) -> String {
    format!("  {:<26} {:<26} {}", d.identifier, d.title, value_text(&d.kind))
}
