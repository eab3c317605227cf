//! Plain text report formatter

use super::{ReportFormatter, RunHeader};
use crate::processing::{FileOutcome, FileStatus, Mode, Summary};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - diff lines per change and a summary block
pub struct TextFormatter<W: Write> {
    writer: W,
    show_diff: bool,
    show_skipped: bool,
    mode: Mode,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, show_diff: bool, show_skipped: bool) -> Self {
        Self {
            writer,
            show_diff,
            show_skipped,
            mode: Mode::Apply,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(show_diff: bool, show_skipped: bool) -> Self {
        Self::new(io::stdout(), show_diff, show_skipped)
    }
}

fn mode_label(mode: Mode) -> &'static str {
    match mode {
        Mode::Apply => "APPLY (writing changes)",
        Mode::DryRun => "DRY-RUN (no changes written)",
        Mode::Check => "CHECK (no changes written)",
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn begin(&mut self, header: &RunHeader) -> Result<()> {
        self.mode = header.mode;
        writeln!(self.writer, "=== jaspace ===")?;
        writeln!(self.writer, "Mode: {}", mode_label(header.mode))?;
        writeln!(self.writer, "Paths: {:?}", header.paths)?;
        writeln!(self.writer, "Exclude: {:?}", header.exclude)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Found {} files to process.", header.file_count)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn file(&mut self, outcome: &FileOutcome) -> Result<()> {
        let path = outcome.path.display();
        match &outcome.status {
            FileStatus::Unchanged => {}
            FileStatus::Changed { changes, .. } => {
                if self.show_diff {
                    for change in changes {
                        writeln!(self.writer, "  {}:{}", path, change.line_number)?;
                        writeln!(self.writer, "    - {}", change.original.trim_end())?;
                        writeln!(self.writer, "    + {}", change.rewritten.trim_end())?;
                    }
                }
            }
            FileStatus::Skipped { reason } => {
                if self.show_skipped {
                    writeln!(self.writer, "  SKIP ({reason}): {path}")?;
                }
            }
            FileStatus::Failed { error } => {
                writeln!(self.writer, "  FAILED: {path}: {error}")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self, summary: &Summary) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "=== Summary ===")?;
        writeln!(self.writer, "Files scanned:  {}", summary.files_scanned)?;
        writeln!(self.writer, "Files changed:  {}", summary.files_changed)?;
        writeln!(self.writer, "Lines changed:  {}", summary.lines_changed)?;
        if summary.files_skipped > 0 {
            writeln!(self.writer, "Files skipped:  {}", summary.files_skipped)?;
        }
        if summary.files_failed > 0 {
            writeln!(self.writer, "Files failed:   {}", summary.files_failed)?;
        }
        if !self.mode.writes() {
            writeln!(self.writer, "(dry-run mode: no files were modified)")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jaspace_core::LineChange;
    use std::path::PathBuf;

    fn header(mode: Mode) -> RunHeader {
        RunHeader {
            mode,
            paths: vec!["src".to_string()],
            exclude: vec!["externals".to_string()],
            file_count: 2,
        }
    }

    fn changed() -> FileOutcome {
        FileOutcome {
            path: PathBuf::from("src/a.cpp"),
            status: FileStatus::Changed {
                changes: vec![LineChange {
                    line_number: 4,
                    original: "int x; // のfar\r".to_string(),
                    rewritten: "int x; // の far\r".to_string(),
                }],
                written: false,
            },
        }
    }

    fn render(formatter: TextFormatter<Vec<u8>>) -> String {
        String::from_utf8(formatter.writer).unwrap()
    }

    #[test]
    fn test_dry_run_report() {
        let mut formatter = TextFormatter::new(Vec::new(), true, false);
        formatter.begin(&header(Mode::DryRun)).unwrap();
        formatter.file(&changed()).unwrap();
        formatter
            .finish(&Summary {
                files_scanned: 2,
                files_changed: 1,
                lines_changed: 1,
                ..Summary::default()
            })
            .unwrap();

        let out = render(formatter);
        assert!(out.contains("Mode: DRY-RUN"));
        assert!(out.contains("Paths: [\"src\"]"));
        assert!(out.contains("Found 2 files to process."));
        assert!(out.contains("  src/a.cpp:4\n    - int x; // のfar\n    + int x; // の far\n"));
        assert!(out.contains("Files scanned:  2"));
        assert!(out.contains("Files changed:  1"));
        assert!(out.contains("Lines changed:  1"));
        assert!(!out.contains("Files skipped"));
        assert!(out.contains("(dry-run mode: no files were modified)"));
    }

    #[test]
    fn test_apply_without_diff() {
        let mut formatter = TextFormatter::new(Vec::new(), false, false);
        formatter.begin(&header(Mode::Apply)).unwrap();
        formatter.file(&changed()).unwrap();
        formatter.finish(&Summary::default()).unwrap();

        let out = render(formatter);
        assert!(out.contains("Mode: APPLY"));
        assert!(!out.contains("src/a.cpp:4"));
        assert!(!out.contains("dry-run mode"));
    }

    #[test]
    fn test_skipped_shown_when_verbose() {
        let skipped = FileOutcome {
            path: PathBuf::from("sjis.cpp"),
            status: FileStatus::Skipped {
                reason: "not UTF-8".to_string(),
            },
        };

        let mut quiet = TextFormatter::new(Vec::new(), false, false);
        quiet.file(&skipped).unwrap();
        assert_eq!(render(quiet), "");

        let mut verbose = TextFormatter::new(Vec::new(), false, true);
        verbose.file(&skipped).unwrap();
        assert_eq!(render(verbose), "  SKIP (not UTF-8): sjis.cpp\n");
    }

    #[test]
    fn test_summary_counts_skipped_and_failed() {
        let mut formatter = TextFormatter::new(Vec::new(), false, false);
        formatter
            .finish(&Summary {
                files_scanned: 3,
                files_skipped: 1,
                files_failed: 1,
                ..Summary::default()
            })
            .unwrap();
        let out = render(formatter);
        assert!(out.contains("Files skipped:  1"));
        assert!(out.contains("Files failed:   1"));
    }
}
