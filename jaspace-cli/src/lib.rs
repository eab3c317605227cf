//! jaspace CLI library
//!
//! This library provides the command-line interface for inserting spaces
//! between Japanese and Latin text inside C-family source comments.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod progress;

pub use error::{CliError, CliResult};

use clap::Parser;

/// Top-level command line
#[derive(Debug, Parser)]
#[command(
    name = "jaspace",
    version,
    about = "Insert spaces between Japanese and Latin text in C/C++ comments"
)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: commands::Commands,
}
