//! Comment-aware spacing between Japanese and Latin text
//!
//! Spell checkers and tokenizers read `のfar` or `FOV値` as a single token.
//! This crate finds the comments of C-family source (`//` and `/* */`, skipping
//! `"..."` and `'...'` literals) and inserts one space at every boundary
//! between a Japanese character and an ASCII letter inside them. Everything
//! outside comments is left byte for byte as it was.
//!
//! # Architecture
//!
//! - [`mod@classify`]: per-character script classification
//! - [`scanner`]: per-line comment range state machine
//! - [`spacer`]: boundary space insertion on comment text
//! - [`line`] / [`transform`]: one line / a whole file
//! - [`source`]: UTF-8 decoding and line splitting that keeps terminators
//!
//! # Example
//!
//! ```rust
//! use jaspace_core::{transform_file, SourceText};
//!
//! let source = SourceText::parse("int x; // のfar boundary\r\n/* FOV値\r\nについて */\r\n");
//! let result = transform_file(source.contents());
//!
//! assert_eq!(result.changed_lines(), 2);
//! assert_eq!(
//!     source.render_with(&result.lines),
//!     "int x; // の far boundary\r\n/* FOV 値\r\nについて */\r\n"
//! );
//! ```

pub mod classify;
pub mod error;
pub mod line;
pub mod scanner;
pub mod source;
pub mod spacer;
pub mod transform;

pub use classify::{classify, CharacterClass};
pub use error::{CoreError, Result};
pub use line::{transform_line, LineOutcome};
pub use scanner::{scan_line, CommentKind, CommentRange, CommentRanges, ScanOutcome, ScanState};
pub use source::{Line, LineEnding, SourceText};
pub use spacer::insert_boundary_spaces;
pub use transform::{transform_file, FileTransform, LineChange, SpacedLines};
