//! Source positions.

use core::fmt;

/// A range of source text, with the line and column of its start.
///
/// Offsets are byte indices into the submission's source string; `line` and
/// `column` are 1-based and refer to the start of the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The slice of `source` this span covers.
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// The range from the start of `a` to the end of `b`, anchored at `a`.
    pub fn combine(a: Span, b: Span) -> Span {
        Span::new(a.start, b.end, a.line, a.column)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
