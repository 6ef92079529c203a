use anyhow::Result;
use colored::Colorize;
use pathgate_policy::PathPolicy;
use serde_json::json;

use crate::output::{OutputFormat, json::print_json};

/// Print the decision for `name`; returns whether execution is permitted.
pub fn run(policy: &PathPolicy, name: &str, format: OutputFormat) -> Result<bool> {
    let config = policy.get_config(name);
    let permitted = !config.deny_execution;

    if format.is_json() {
        print_json(&json!({
            "name": name,
            "permitted": permitted,
            "log_usage": config.log_usage,
        }))?;
        return Ok(permitted);
    }

    if permitted {
        println!("{} {name} ({})", "allowed:".green().bold(), config.describe());
    } else {
        println!("{} {name} ({})", "denied:".red().bold(), config.describe());
    }

    Ok(permitted)
}
