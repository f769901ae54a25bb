use std::fmt::Display;

/// Line and column of a byte offset (both 1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePos {
    pub line: usize,
    pub column: usize,
}

/// Byte range in the query source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Resolve both ends of the span to line/column positions.
    /// Returns `None` when the span does not fit inside `source`.
    pub fn to_pos(&self, source: &str) -> Option<(SourcePos, SourcePos)> {
        if self.start > self.end || self.end > source.len() {
            return None;
        }
        Some((position_of(source, self.start), position_of(source, self.end)))
    }
}

fn position_of(source: &str, offset: usize) -> SourcePos {
    let mut pos = SourcePos { line: 1, column: 1 };
    for (i, c) in source.char_indices() {
        if i >= offset {
            break;
        }
        if c == '\n' {
            pos.line += 1;
            pos.column = 1;
        } else {
            pos.column += 1;
        }
    }
    pos
}

/// A value with associated span information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}
