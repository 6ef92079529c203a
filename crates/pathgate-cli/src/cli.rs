use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use pathgate_policy::{HostPlatform, Preset};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "pathgate")]
#[command(version, about = "Pathgate - sandboxed build PATH tool policy")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Host platform to evaluate the policy for (defaults to this host)
    #[arg(long, global = true, env = "PATHGATE_PLATFORM")]
    pub platform: Option<HostPlatform>,

    /// Config file path (defaults to ~/.config/pathgate/config.toml)
    #[arg(long, global = true, env = "PATHGATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the policy for one or more tools
    Lookup {
        /// Tool names (exact executable names)
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List every registered tool
    List {
        /// Only show tools with this preset
        #[arg(long)]
        preset: Option<Preset>,
    },

    /// Exit non-zero if the policy denies running a tool
    Check {
        /// Tool name
        name: String,
    },

    /// Show the named presets
    Presets,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
