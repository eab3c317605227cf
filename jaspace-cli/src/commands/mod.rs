//! CLI command implementations

use clap::Subcommand;

pub mod fix;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert spaces between Japanese and Latin text inside comments
    Fix(fix::FixArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Fix(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
