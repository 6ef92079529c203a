use anyhow::Result;
use comfy_table::{Cell, Table};
use pathgate_policy::PathPolicy;

use super::ToolReport;
use crate::output::table::{flag_cell, print_table};
use crate::output::{OutputFormat, json::print_json};

pub fn run(policy: &PathPolicy, names: &[String], format: OutputFormat) -> Result<()> {
    let reports: Vec<ToolReport<'_>> = names
        .iter()
        .map(|name| ToolReport::new(name, policy.get_config(name), policy.contains(name)))
        .collect();

    if format.is_json() {
        return print_json(&reports);
    }

    let mut table = Table::new();
    table.set_header(vec!["Tool", "Preset", "Symlink", "Log", "Deny", "Source"]);

    for report in &reports {
        table.add_row(vec![
            Cell::new(report.name),
            Cell::new(report.preset_label()),
            flag_cell(report.config.allow_symlink),
            flag_cell(report.config.log_usage),
            flag_cell(report.config.deny_execution),
            Cell::new(if report.registered { "table" } else { "fallback" }),
        ]);
    }

    print_table(table)
}
