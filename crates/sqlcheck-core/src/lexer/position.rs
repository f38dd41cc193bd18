//! Source location tracking for tokens and diagnostics.

use core::fmt;

use serde::Serialize;

/// A 1-based line/column location in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: usize,
    /// Column number in characters, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// The position reported for lexemes that cannot be located.
    #[must_use]
    pub const fn unknown() -> Self {
        Self::new(0, 0)
    }

    /// Returns the position one character further on the same line.
    #[must_use]
    pub const fn next_column(self) -> Self {
        Self::new(self.line, self.column + 1)
    }

    /// Returns the position at the start of the following line.
    #[must_use]
    pub const fn next_line(self) -> Self {
        Self::new(self.line + 1, 1)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
