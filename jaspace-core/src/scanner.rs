//! Per-line comment range scanner
//!
//! A small lexical state machine that finds the comment text of one line of
//! C-family source. The only state carried between lines is whether a
//! `/* ... */` block comment is still open.
//!
//! The scanner works on bytes. Every delimiter it looks for (`/`, `*`, `"`,
//! `'`, `\`) is ASCII, and UTF-8 continuation bytes never collide with ASCII,
//! so the produced offsets always fall on `char` boundaries of the line.
//!
//! Literal handling is best-effort: an unterminated `"` or `'` swallows the
//! rest of the line, including anything that looks like a comment opener.

use smallvec::SmallVec;
use std::ops::Range;

/// Block-comment state carried from one line to the next
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// Outside any comment
    #[default]
    Code,
    /// Inside a `/* ... */` comment opened on an earlier line
    InBlockComment,
}

impl ScanState {
    /// Whether a block comment is still open
    pub fn in_block_comment(self) -> bool {
        matches!(self, ScanState::InBlockComment)
    }
}

/// How a comment range was introduced
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommentKind {
    /// Tail of a block comment opened on a previous line
    Continuation,
    /// `//` comment running to end of line
    Line,
    /// `/*` comment opened on this line (closed here or not)
    Block,
}

/// Half-open byte range `[start, end)` of comment text within one line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CommentRange {
    /// First byte of the comment, including its opening delimiter
    pub start: usize,
    /// One past the last byte, including the closing delimiter if any
    pub end: usize,
    /// What opened the comment
    pub kind: CommentKind,
}

impl CommentRange {
    /// Create a new comment range
    pub fn new(start: usize, end: usize, kind: CommentKind) -> Self {
        debug_assert!(start <= end);
        Self { start, end, kind }
    }

    /// The range as a slice index
    pub fn span(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no bytes (an empty line inside a block comment)
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Comment ranges of one line, most lines have at most one or two
pub type CommentRanges = SmallVec<[CommentRange; 2]>;

/// Result of scanning one line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOutcome {
    /// Comment ranges in increasing, non-overlapping order
    pub ranges: CommentRanges,
    /// State to carry into the next line
    pub state: ScanState,
}

impl ScanOutcome {
    fn finish(ranges: CommentRanges, state: ScanState) -> Self {
        Self { ranges, state }
    }
}

/// Scan one line (without its terminator) for comment ranges.
///
/// `state` is the state produced by the previous line, or
/// [`ScanState::Code`] for the first line of a file.
///
/// The closer search starts after the opener, so `/*/` leaves the comment
/// open as a C compiler would, unlike a search that reuses the opener's `*`.
pub fn scan_line(line: &str, state: ScanState) -> ScanOutcome {
    let bytes = line.as_bytes();
    let len = bytes.len();
    let mut ranges = CommentRanges::new();
    let mut i = 0;

    if state.in_block_comment() {
        match find_block_end(bytes, 0) {
            Some(end) => {
                ranges.push(CommentRange::new(0, end, CommentKind::Continuation));
                i = end;
            }
            None => {
                ranges.push(CommentRange::new(0, len, CommentKind::Continuation));
                return ScanOutcome::finish(ranges, ScanState::InBlockComment);
            }
        }
    }

    while i < len {
        match bytes[i] {
            quote @ (b'"' | b'\'') => i = skip_literal(bytes, i + 1, quote),
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                ranges.push(CommentRange::new(i, len, CommentKind::Line));
                return ScanOutcome::finish(ranges, ScanState::Code);
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => match find_block_end(bytes, i + 2) {
                Some(end) => {
                    ranges.push(CommentRange::new(i, end, CommentKind::Block));
                    i = end;
                }
                None => {
                    ranges.push(CommentRange::new(i, len, CommentKind::Block));
                    return ScanOutcome::finish(ranges, ScanState::InBlockComment);
                }
            },
            _ => i += 1,
        }
    }

    ScanOutcome::finish(ranges, ScanState::Code)
}

/// Offset one past the first `*/` found at or after `from`
fn find_block_end(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(2)
        .position(|pair| pair == b"*/")
        .map(|pos| from + pos + 2)
}

/// Offset one past the closing `quote`, or end of line if there is none.
/// A backslash consumes the next byte whatever it is.
fn skip_literal(bytes: &[u8], mut i: usize, quote: u8) -> usize {
    let len = bytes.len();
    while i < len {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return i + 1,
            _ => i += 1,
        }
    }
    len
}
