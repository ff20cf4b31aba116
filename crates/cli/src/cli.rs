use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{defaults_command, describe_command, requirements_command};

#[derive(Parser, Debug)]
#[command(name = "unity-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the build step parameters come from
#[derive(Args, Debug, Default)]
pub struct ParameterArgs {
    /// JSON file with a flat object of parameter names to values
    #[arg(long = "params", value_name = "FILE")]
    pub params_file: Option<PathBuf>,

    /// Set a parameter, overriding the file (repeatable)
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Fill parameters missing from the input with the run type defaults
    #[arg(long)]
    pub defaults: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the human-readable summary of a build step
    #[command(visible_alias = "d")]
    Describe {
        #[command(flatten)]
        input: ParameterArgs,
    },
    /// List the agent requirements of a build step
    #[command(visible_alias = "r")]
    Requirements {
        #[command(flatten)]
        input: ParameterArgs,

        /// Print requirements as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the properties a new build step starts with
    Defaults,
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Describe { input } => describe_command(&input),
            Commands::Requirements { input, json } => requirements_command(&input, json),
            Commands::Defaults => defaults_command(),
        }
    }
}
