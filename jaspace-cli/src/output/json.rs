//! JSON report formatter

use super::{ReportFormatter, RunHeader};
use crate::processing::{FileOutcome, FileStatus, Mode, Summary};
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

/// JSON formatter - buffers outcomes and writes one document at the end
pub struct JsonFormatter<W: Write> {
    writer: W,
    mode: Mode,
    files: Vec<FileOutcome>,
}

/// Shape of the JSON document
#[derive(Debug, Serialize)]
struct Report<'a> {
    mode: Mode,
    files: &'a [FileOutcome],
    summary: &'a Summary,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            mode: Mode::Apply,
            files: Vec::new(),
        }
    }
}

impl<W: Write> ReportFormatter for JsonFormatter<W> {
    fn begin(&mut self, header: &RunHeader) -> Result<()> {
        self.mode = header.mode;
        Ok(())
    }

    fn file(&mut self, outcome: &FileOutcome) -> Result<()> {
        // Unchanged files only add noise
        if outcome.status != FileStatus::Unchanged {
            self.files.push(outcome.clone());
        }
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        let report = Report {
            mode: self.mode,
            files: &self.files,
            summary,
        };
        serde_json::to_writer_pretty(&mut self.writer, &report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
