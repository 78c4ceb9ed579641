//! Source positions.

use std::fmt;

/// A point in the source: absolute byte offset plus 1-based line and column.
///
/// Columns count characters, not bytes. The first character of every line
/// is column 1. Positions order by offset first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Byte offset from the start of the buffer.
    pub offset: u32,
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number, starting at 1.
    pub column: u32,
}

impl Position {
    /// Position of the first character of a buffer.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };

    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Position {
            offset,
            line,
            column,
        }
    }

    /// A position is valid once it carries a line number.
    pub const fn is_valid(&self) -> bool {
        self.line > 0
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
