//! Source text split into lines with their terminators
//!
//! The transform works on terminator-free lines. [`SourceText`] remembers how
//! every line ended so a rewritten file can be reassembled byte for byte,
//! keeping LF, CRLF, mixed endings and a missing final newline as they were.

use crate::error::Result;

/// How a line was terminated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineEnding {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// Last line of a file without a trailing newline
    None,
}

impl LineEnding {
    /// The terminator text
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::None => "",
        }
    }
}

/// One line of source text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Line content without terminator (a lone `\r` stays in here)
    pub content: String,
    /// Terminator that followed the content
    pub ending: LineEnding,
}

/// A decoded source file as a sequence of lines
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceText {
    lines: Vec<Line>,
}

impl SourceText {
    /// Decode raw bytes as UTF-8 and split into lines
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::parse(text))
    }

    /// Split text into lines
    pub fn parse(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;

        while !rest.is_empty() {
            match rest.find('\n') {
                Some(pos) => {
                    let body = &rest[..pos];
                    let (content, ending) = match body.strip_suffix('\r') {
                        Some(stripped) => (stripped, LineEnding::CrLf),
                        None => (body, LineEnding::Lf),
                    };
                    lines.push(Line {
                        content: content.to_string(),
                        ending,
                    });
                    rest = &rest[pos + 1..];
                }
                None => {
                    lines.push(Line {
                        content: rest.to_string(),
                        ending: LineEnding::None,
                    });
                    break;
                }
            }
        }

        Self { lines }
    }

    /// All lines
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Line contents without terminators
    pub fn contents(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|line| line.content.as_str())
    }

    /// Number of lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the text has no lines at all
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Reassemble the original text
    pub fn render(&self) -> String {
        self.render_with(self.contents())
    }

    /// Reassemble using replacement contents, keeping each line's terminator.
    ///
    /// `contents` must yield one item per line; extra items are ignored and
    /// missing ones drop the remaining lines.
    pub fn render_with<I, S>(&self, contents: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        for (line, content) in self.lines.iter().zip(contents) {
            out.push_str(content.as_ref());
            out.push_str(line.ending.as_str());
        }
        out
    }
}
