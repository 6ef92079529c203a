use anyhow::Result;
use comfy_table::{Cell, Table};
use pathgate_policy::Preset;
use serde_json::json;

use crate::output::table::{flag_cell, print_table};
use crate::output::{OutputFormat, json::print_json};

pub fn run(format: OutputFormat) -> Result<()> {
    if format.is_json() {
        let presets: Vec<_> = Preset::ALL
            .into_iter()
            .map(|preset| json!({ "preset": preset, "config": preset.config() }))
            .collect();
        return print_json(&presets);
    }

    let mut table = Table::new();
    table.set_header(vec!["Preset", "Symlink", "Log", "Deny", "Linux-only prebuilt"]);

    for preset in Preset::ALL {
        let config = preset.config();
        table.add_row(vec![
            Cell::new(preset),
            flag_cell(config.allow_symlink),
            flag_cell(config.log_usage),
            flag_cell(config.deny_execution),
            flag_cell(config.platform_restricted),
        ]);
    }

    print_table(table)
}
