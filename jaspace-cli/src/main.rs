//! jaspace command-line entry point

use clap::Parser;
use jaspace_cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
