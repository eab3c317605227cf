//! Report output module

use crate::processing::{FileOutcome, Mode, Summary};
use anyhow::Result;
use serde::{Deserialize, Serialize};

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable diff lines and summary
    Text,
    /// Single JSON document
    Json,
}

/// What a run is about to do
#[derive(Debug, Clone, Serialize)]
pub struct RunHeader {
    /// Apply, dry run or check
    pub mode: Mode,
    /// Requested paths and patterns
    pub paths: Vec<String>,
    /// Exclusion substrings
    pub exclude: Vec<String>,
    /// Number of files found
    pub file_count: usize,
}

/// Trait for report formatters
pub trait ReportFormatter {
    /// Called once before any file is reported
    fn begin(&mut self, header: &RunHeader) -> Result<()>;

    /// Report one processed file
    fn file(&mut self, outcome: &FileOutcome) -> Result<()>;

    /// Finalize output with the run totals
    fn finish(&mut self, summary: &Summary) -> Result<()>;
}
