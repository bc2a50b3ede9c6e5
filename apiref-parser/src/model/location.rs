use std::fmt;

/// A `Location` identifies a single source line of a document.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
#[non_exhaustive]
pub struct Location {
    /// 1-based line number.
    pub line: usize,
    /// Byte offset of the first character of the line.
    pub absolute_start: usize,
    /// Byte offset one past the last character of the line, terminator excluded.
    pub absolute_end: usize,
}

impl Location {
    #[must_use]
    pub fn new(line: usize, absolute_start: usize, absolute_end: usize) -> Self {
        Self {
            line,
            absolute_start,
            absolute_end,
        }
    }

    /// Length of the located line in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.absolute_end.saturating_sub(self.absolute_start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}", self.line)
    }
}
