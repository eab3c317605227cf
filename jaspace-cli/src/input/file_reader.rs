//! File reading and writing utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use jaspace_core::{CoreError, SourceText};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file and split it into lines, rejecting non-UTF-8 content
    pub fn read_source(path: &Path) -> Result<SourceText> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

        SourceText::decode(&bytes).map_err(|err| match err {
            CoreError::InvalidUtf8 { valid_up_to } => CliError::NotUtf8 {
                path: path.display().to_string(),
                valid_up_to,
            }
            .into(),
        })
    }

    /// Write text back to a file, replacing its content
    pub fn write_text(path: &Path, text: &str) -> Result<()> {
        fs::write(path, text)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}
