mod cli;
mod commands;
mod completions;
mod config;
mod error;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::CliConfig;
use pathgate_policy::{HostPlatform, PathPolicy};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        error::handle_error(err);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Commands::Completions { shell } = cli.command {
        completions::generate_completions(shell);
        return Ok(());
    }

    let config = CliConfig::load(cli.config.as_deref())?;
    let platform = cli
        .platform
        .or(config.default.platform)
        .unwrap_or_else(HostPlatform::current);
    let format = cli.format.or(config.default.format).unwrap_or_default();

    let policy = PathPolicy::builder()
        .platform(platform)
        .overrides(&config.policy)
        .build();

    match cli.command {
        Commands::Lookup { names } => commands::lookup::run(&policy, &names, format),
        Commands::List { preset } => commands::list::run(&policy, preset, format),
        Commands::Check { name } => {
            if !commands::check::run(&policy, &name, format)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Presets => commands::presets::run(format),
        Commands::Completions { .. } => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();
}
