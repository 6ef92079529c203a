pub mod check;
pub mod list;
pub mod lookup;
pub mod presets;

use pathgate_policy::{PathConfig, Preset};
use serde::Serialize;

/// A single tool decision as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct ToolReport<'a> {
    pub name: &'a str,
    pub preset: Option<Preset>,
    pub registered: bool,
    #[serde(flatten)]
    pub config: PathConfig,
}

impl<'a> ToolReport<'a> {
    pub fn new(name: &'a str, config: PathConfig, registered: bool) -> Self {
        Self {
            name,
            preset: Preset::classify(&config),
            registered,
            config,
        }
    }

    pub fn preset_label(&self) -> String {
        self.preset
            .map(|preset| preset.to_string())
            .unwrap_or_else(|| "custom".to_string())
    }
}
