//! Parser error types.

use std::fmt;

use thiserror::Error;

use crate::lexer::{Position, Token, TokenKind};

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A specific terminal.
    Token(TokenKind),
    /// One of the column type keywords.
    DataType,
    /// The start of a factor.
    Factor,
    /// A comparison operator.
    ComparisonOperator,
    /// A literal in a VALUES list.
    Value,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "'{}'", kind.name()),
            Self::DataType => f.write_str("data type (INT, FLOAT, or TEXT)"),
            Self::Factor => f.write_str("factor (identifier, number, string, or '(')"),
            Self::ComparisonOperator => {
                f.write_str("comparison operator (=, !=, <, >, <=, >=)")
            }
            Self::Value => f.write_str("value (STRING_LITERAL or NUMBER_LITERAL)"),
        }
    }
}

/// A syntax error. The `Display` output is the user-facing diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A token other than the expected one was found.
    #[error("Syntax Error: Expected {expected} at {position}, but found '{found}'.")]
    Mismatch {
        /// What was expected.
        expected: Expected,
        /// The lexeme actually found.
        found: String,
        /// Where it was found.
        position: Position,
    },

    /// Input ran out while something was still expected.
    #[error("Syntax Error: Expected {expected}, but reached end of input.")]
    EndOfInput {
        /// What was expected.
        expected: Expected,
    },

    /// A token that cannot start a statement.
    #[error("Syntax Error: Unexpected token '{found}' at {position}.")]
    UnexpectedToken {
        /// The offending lexeme.
        found: String,
        /// Where it was found.
        position: Position,
    },

    /// A failure inside the parser itself, reported against the current
    /// token.
    #[error("Syntax Error: Unexpected error at {position}: {message}")]
    Internal {
        /// Description of the failure.
        message: String,
        /// Position of the token being parsed.
        position: Position,
    },
}

impl SyntaxError {
    /// Builds the error for an unmet expectation at `found`, or at end of
    /// input when `found` is `None`.
    #[must_use]
    pub fn expected(expected: Expected, found: Option<&Token>) -> Self {
        match found {
            Some(token) => Self::Mismatch {
                expected,
                found: token.lexeme.clone(),
                position: token.position,
            },
            None => Self::EndOfInput { expected },
        }
    }

    /// Builds the error for a token that cannot start a statement.
    #[must_use]
    pub fn unexpected(token: &Token) -> Self {
        Self::UnexpectedToken {
            found: token.lexeme.clone(),
            position: token.position,
        }
    }

    /// Returns where the error occurred, when known.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Mismatch { position, .. }
            | Self::UnexpectedToken { position, .. }
            | Self::Internal { position, .. } => Some(*position),
            Self::EndOfInput { .. } => None,
        }
    }
}
