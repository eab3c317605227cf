//! Per-file processing, run in parallel across files
//!
//! Each file is one unit of work: read, transform line by line in order, and
//! write back if needed. Files never share scanner state, so they can be spread
//! over a rayon pool freely.

use crate::error::CliError;
use crate::input::FileReader;
use crate::progress::ProgressReporter;
use anyhow::Result;
use jaspace_core::{transform_file, LineChange};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What to do with files that need changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Rewrite files in place
    Apply,
    /// Report only
    DryRun,
    /// Report only, fail when anything would change
    Check,
}

impl Mode {
    /// Whether files are written back
    pub fn writes(self) -> bool {
        matches!(self, Mode::Apply)
    }
}

/// Result of processing one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum FileStatus {
    /// No comment needed spacing
    Unchanged,
    /// Some lines changed (and were written back in apply mode)
    Changed {
        /// Rewritten lines
        changes: Vec<LineChange>,
        /// Whether the file on disk was updated
        written: bool,
    },
    /// File was not processed (unreadable or not UTF-8)
    Skipped {
        /// Why the file was skipped
        reason: String,
    },
    /// Writing the result back failed
    Failed {
        /// The write error
        error: String,
    },
}

/// A processed file and its status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    /// Path as discovered
    pub path: PathBuf,
    /// What happened
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileOutcome {
    /// Number of rewritten lines
    pub fn changed_lines(&self) -> usize {
        match &self.status {
            FileStatus::Changed { changes, .. } => changes.len(),
            _ => 0,
        }
    }
}

/// Totals over a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Files looked at
    pub files_scanned: usize,
    /// Files with at least one rewritten line
    pub files_changed: usize,
    /// Rewritten lines over all files
    pub lines_changed: usize,
    /// Files not processed
    pub files_skipped: usize,
    /// Files whose write failed
    pub files_failed: usize,
}

impl Summary {
    /// Tally outcomes
    pub fn from_outcomes(outcomes: &[FileOutcome]) -> Self {
        let mut summary = Summary {
            files_scanned: outcomes.len(),
            ..Summary::default()
        };
        for outcome in outcomes {
            match &outcome.status {
                FileStatus::Unchanged => {}
                FileStatus::Changed { changes, .. } => {
                    summary.files_changed += 1;
                    summary.lines_changed += changes.len();
                }
                FileStatus::Skipped { .. } => summary.files_skipped += 1,
                FileStatus::Failed { .. } => summary.files_failed += 1,
            }
        }
        summary
    }
}

/// Process a single file
pub fn process_file(path: &Path, mode: Mode) -> FileOutcome {
    let status = match FileReader::read_source(path) {
        Err(err) => {
            let reason = match err.downcast_ref::<CliError>() {
                Some(CliError::NotUtf8 { .. }) => {
                    log::info!("Skipping {}: not UTF-8", path.display());
                    "not UTF-8".to_string()
                }
                _ => {
                    log::warn!("Skipping {}: {err:#}", path.display());
                    format!("{err:#}")
                }
            };
            FileStatus::Skipped { reason }
        }
        Ok(source) => {
            let result = transform_file(source.contents());
            if result.ends_in_block_comment() {
                log::debug!("{} ends inside an open block comment", path.display());
            }

            if !result.is_changed() {
                FileStatus::Unchanged
            } else if mode.writes() {
                let text = source.render_with(&result.lines);
                match FileReader::write_text(path, &text) {
                    Ok(()) => FileStatus::Changed {
                        changes: result.changes,
                        written: true,
                    },
                    Err(err) => {
                        log::error!("{err:#}");
                        FileStatus::Failed {
                            error: format!("{err:#}"),
                        }
                    }
                }
            } else {
                FileStatus::Changed {
                    changes: result.changes,
                    written: false,
                }
            }
        }
    };

    FileOutcome {
        path: path.to_path_buf(),
        status,
    }
}

/// Process files on a pool of `threads` workers, returning outcomes in the
/// order of `files`
pub fn process_files(
    files: &[PathBuf],
    mode: Mode,
    threads: usize,
    progress: &ProgressReporter,
) -> Result<Vec<FileOutcome>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build thread pool: {e}"))?;

    log::debug!("Processing {} files on {} threads", files.len(), threads);

    let outcomes: Vec<FileOutcome> = pool.install(|| {
        files
            .par_iter()
            .map(|path| {
                let outcome = process_file(path, mode);
                progress.file_completed(&path.display().to_string());
                outcome
            })
            .collect()
    });

    Ok(outcomes)
}
