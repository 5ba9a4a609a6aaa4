//! Source spans and definition-site locations.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

/// A line and column position in source text.
///
/// Stored exactly as the front end reports it (1-based for the usual
/// front ends). Only used for display.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Ord, PartialOrd)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl LineCol {
    /// Create a new LineCol position.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Self { line, col }
    }
}

impl fmt::Debug for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

impl fmt::Display for LineCol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// A source range inside one file.
///
/// Field order matters: the derived ordering compares the file first, then
/// the start position, then the end position, which is what the index keys on.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceSpan {
    pub file: Arc<str>,
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl SourceSpan {
    pub fn new(
        file: impl Into<Arc<str>>,
        start_line: u32,
        start_col: u32,
        end_line: u32,
        end_col: u32,
    ) -> Self {
        Self {
            file: file.into(),
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// A span on a single line.
    pub fn on_line(file: impl Into<Arc<str>>, line: u32, start_col: u32, end_col: u32) -> Self {
        Self::new(file, line, start_col, line, end_col)
    }

    #[inline]
    pub fn start(&self) -> LineCol {
        LineCol::new(self.start_line, self.start_col)
    }

    #[inline]
    pub fn end(&self) -> LineCol {
        LineCol::new(self.end_line, self.end_col)
    }

    /// Whether `(line, col)` lies inside this span. Both boundaries are inclusive.
    pub fn contains(&self, line: u32, col: u32) -> bool {
        let after_start =
            line > self.start_line || (line == self.start_line && col >= self.start_col);
        let before_end = line < self.end_line || (line == self.end_line && col <= self.end_col);
        after_start && before_end
    }

    /// Rough size used to pick the innermost of several containing spans.
    pub(crate) fn extent(&self) -> (u32, u32) {
        let lines = self.end_line.saturating_sub(self.start_line);
        let cols = if lines == 0 {
            self.end_col.saturating_sub(self.start_col)
        } else {
            self.end_col
        };
        (lines, cols)
    }
}

impl fmt::Debug for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start_line == self.end_line {
            write!(
                f,
                "{}:{}:{}-{}",
                self.file, self.start_line, self.start_col, self.end_col
            )
        } else {
            write!(
                f,
                "{}:({})-({})",
                self.file,
                self.start().to_string().replace(':', ","),
                self.end().to_string().replace(':', ",")
            )
        }
    }
}

/// Where something lives: a real span, or a description when there is none.
///
/// `Opaque` covers compiler-generated code, built-ins, and the placeholder
/// locations some front ends attach to synthesized names.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationRef {
    Precise(SourceSpan),
    Opaque(SmolStr),
}

impl LocationRef {
    pub fn opaque(description: impl Into<SmolStr>) -> Self {
        LocationRef::Opaque(description.into())
    }

    pub fn as_span(&self) -> Option<&SourceSpan> {
        match self {
            LocationRef::Precise(span) => Some(span),
            LocationRef::Opaque(_) => None,
        }
    }

    pub fn is_precise(&self) -> bool {
        matches!(self, LocationRef::Precise(_))
    }
}

impl fmt::Display for LocationRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationRef::Precise(span) => write!(f, "{span}"),
            LocationRef::Opaque(description) => write!(f, "<{description}>"),
        }
    }
}
