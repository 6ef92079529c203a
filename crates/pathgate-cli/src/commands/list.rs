use anyhow::Result;
use comfy_table::{Cell, Table};
use pathgate_policy::{PathPolicy, Preset};

use super::ToolReport;
use crate::output::table::print_table;
use crate::output::{OutputFormat, json::print_json};

pub fn run(policy: &PathPolicy, preset: Option<Preset>, format: OutputFormat) -> Result<()> {
    let reports: Vec<ToolReport<'_>> = policy
        .entries()
        .into_iter()
        .map(|(name, config)| ToolReport::new(name, config, true))
        .filter(|report| preset.is_none_or(|preset| report.preset == Some(preset)))
        .collect();

    if format.is_json() {
        return print_json(&reports);
    }

    if reports.is_empty() {
        println!("No tools match.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Tool", "Preset", "Decision"]);

    for report in &reports {
        table.add_row(vec![
            Cell::new(report.name),
            Cell::new(report.preset_label()),
            Cell::new(report.config.describe()),
        ]);
    }

    print_table(table)
}
