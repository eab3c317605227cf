//! Single-line transform: scan for comments, space only the comment text

use crate::scanner::{scan_line, ScanState};
use crate::spacer::insert_boundary_spaces;
use std::borrow::Cow;

/// Result of transforming one line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineOutcome<'a> {
    /// The rewritten line, borrowed when nothing changed
    pub line: Cow<'a, str>,
    /// State to carry into the next line
    pub state: ScanState,
}

impl LineOutcome<'_> {
    /// Whether the line was rewritten
    pub fn is_changed(&self) -> bool {
        matches!(self.line, Cow::Owned(_))
    }
}

/// Transform one line (without its terminator).
///
/// Code and literal spans are copied through untouched; each comment range is
/// run through [`insert_boundary_spaces`]. The output is rebuilt front to back
/// so the offsets of later ranges, taken from the original line, stay valid.
pub fn transform_line(line: &str, state: ScanState) -> LineOutcome<'_> {
    let scan = scan_line(line, state);
    let mut out: Option<String> = None;
    let mut copied = 0;

    for range in &scan.ranges {
        let comment = &line[range.span()];
        if let Cow::Owned(spaced) = insert_boundary_spaces(comment) {
            let buf = out.get_or_insert_with(|| String::with_capacity(line.len() + 8));
            buf.push_str(&line[copied..range.start]);
            buf.push_str(&spaced);
            copied = range.end;
        }
    }

    let line = match out {
        Some(mut buf) => {
            buf.push_str(&line[copied..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(line),
    };

    LineOutcome {
        line,
        state: scan.state,
    }
}
