//! Whole-file transform
//!
//! Folds [`transform_line`] over the lines of one file, threading the
//! [`ScanState`] from each line into the next. The state is local to one call,
//! so independent files can be transformed on different threads.

use crate::line::transform_line;
use crate::scanner::ScanState;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A line that was rewritten
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineChange {
    /// 1-based line number
    pub line_number: usize,
    /// Line before the transform
    pub original: String,
    /// Line after the transform
    pub rewritten: String,
}

/// Result of transforming a whole file
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileTransform {
    /// Every line of the file, rewritten or not, in order
    pub lines: Vec<String>,
    /// Rewritten lines only, in order
    pub changes: Vec<LineChange>,
    /// Scanner state after the last line
    pub final_state: ScanState,
}

impl FileTransform {
    /// Whether any line changed
    pub fn is_changed(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Number of rewritten lines
    pub fn changed_lines(&self) -> usize {
        self.changes.len()
    }

    /// Whether the input ended inside an unterminated block comment
    pub fn ends_in_block_comment(&self) -> bool {
        self.final_state.in_block_comment()
    }
}

/// Transform all lines of one file, in order.
///
/// Lines are expected without their terminators.
pub fn transform_file<I, S>(lines: I) -> FileTransform
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = FileTransform::default();

    let final_state = lines
        .into_iter()
        .enumerate()
        .fold(ScanState::Code, |state, (idx, original)| {
            let original = original.as_ref();
            let outcome = transform_line(original, state);
            let rewritten = outcome.line.into_owned();
            if rewritten != original {
                log::trace!("line {}: {:?} -> {:?}", idx + 1, original, rewritten);
                result.changes.push(LineChange {
                    line_number: idx + 1,
                    original: original.to_string(),
                    rewritten: rewritten.clone(),
                });
            }
            result.lines.push(rewritten);
            outcome.state
        });

    if final_state.in_block_comment() {
        log::debug!("input ends inside an unterminated block comment");
    }
    result.final_state = final_state;
    result
}

/// Iterator adapter yielding transformed lines one at a time.
///
/// Useful for streaming callers that do not want to hold a whole file.
#[derive(Debug)]
pub struct SpacedLines<I> {
    inner: I,
    state: ScanState,
}

impl<I> SpacedLines<I> {
    /// Wrap an iterator of lines, starting outside any comment
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            state: ScanState::Code,
        }
    }

    /// State after the most recently yielded line
    pub fn state(&self) -> ScanState {
        self.state
    }
}

impl<I, S> Iterator for SpacedLines<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.inner.next()?;
        let outcome = transform_line(line.as_ref(), self.state);
        self.state = outcome.state;
        Some(outcome.line.into_owned())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
