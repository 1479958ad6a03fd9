use std::fmt;

use crate::heading::{parse_heading, Heading};

const INDENT_UNIT: &str = "  ";

/// One rendered line of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: usize,
    pub text: String,
    pub anchor: String,
    /// 1-based source line, when the entry came from a whole document.
    pub line: Option<usize>,
}

impl TocEntry {
    pub fn from_heading(heading: Heading) -> Self {
        let anchor = heading.anchor();
        Self {
            level: heading.level,
            text: heading.text,
            anchor,
            line: None,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Indentation depends only on this entry's own depth.
    pub fn indent(&self) -> String {
        INDENT_UNIT.repeat(self.level.saturating_sub(2))
    }
}

impl fmt::Display for TocEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}* [{}](#{})", self.indent(), self.text, self.anchor)
    }
}

/// Turn a single line into a TOC entry, or `None` when it is not a sub-heading.
pub fn make_entry(line: &str) -> Option<TocEntry> {
    parse_heading(line).map(TocEntry::from_heading)
}

pub fn render_entry(line: &str) -> Option<String> {
    make_entry(line).map(|entry| entry.to_string())
}
