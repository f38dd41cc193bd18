//! Lexical error types.

use thiserror::Error;

use super::Position;

/// A problem found while scanning. Scanning always continues past it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    /// A bracketed comment ran to the end of the input.
    #[error("Error: unclosed comment starting at {position}.")]
    UnclosedComment {
        /// Where the comment opened.
        position: Position,
    },

    /// A string literal ran to the end of the input.
    #[error("Error: unclosed string starting at {position}.")]
    UnclosedString {
        /// Where the opening quote is.
        position: Position,
    },

    /// A keyword was written in a case other than uppercase.
    #[error("Error: keyword '{word}' must be uppercase at {position}.")]
    KeywordCase {
        /// The word as written.
        word: String,
        /// Where the word starts.
        position: Position,
    },

    /// A character outside the language alphabet.
    #[error("Error: invalid character '{character}' at {position}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where it occurs.
        position: Position,
    },
}

impl LexicalError {
    /// Returns where the error was detected.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnclosedComment { position }
            | Self::UnclosedString { position }
            | Self::KeywordCase { position, .. }
            | Self::InvalidCharacter { position, .. } => *position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let pos = Position::new(3, 9);
        assert_eq!(
            LexicalError::UnclosedComment { position: pos }.to_string(),
            "Error: unclosed comment starting at line 3, column 9."
        );
        assert_eq!(
            LexicalError::UnclosedString { position: pos }.to_string(),
            "Error: unclosed string starting at line 3, column 9."
        );
        assert_eq!(
            LexicalError::KeywordCase {
                word: String::from("select"),
                position: pos,
            }
            .to_string(),
            "Error: keyword 'select' must be uppercase at line 3, column 9."
        );
        assert_eq!(
            LexicalError::InvalidCharacter {
                character: '@',
                position: pos,
            }
            .to_string(),
            "Error: invalid character '@' at line 3, column 9."
        );
    }
}
