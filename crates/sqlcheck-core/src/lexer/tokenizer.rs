//! Tokenizer implementation.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use super::{Keyword, LexicalError, Position, Token, TokenKind};

/// Bracketed comment delimiters, as `(open, close)` pairs.
const BLOCK_COMMENTS: [(&str, &str); 2] = [("#", "#"), ("/*", "*/")];

/// Occurrence record for one identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdentifierEntry {
    /// Line of the first occurrence.
    pub line: usize,
    /// Column of the first occurrence.
    #[serde(rename = "col")]
    pub column: usize,
    /// Number of occurrences in the source.
    pub count: usize,
}

impl IdentifierEntry {
    const fn first_seen_at(position: Position) -> Self {
        Self {
            line: position.line,
            column: position.column,
            count: 0,
        }
    }

    /// Returns the position of the first occurrence.
    #[must_use]
    pub const fn first_seen(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

/// Identifiers keyed by their exact text.
pub type IdentifierTable = BTreeMap<String, IdentifierEntry>;

/// Everything the lexer produces for one source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexed {
    /// Tokens in source order. There is no end-of-input token.
    pub tokens: Vec<Token>,
    /// Identifier occurrence table.
    pub identifiers: IdentifierTable,
    /// Lexical errors in source order.
    pub errors: Vec<LexicalError>,
}

/// A lexer that tokenizes source text.
///
/// A lexer scans exactly one input: [`Lexer::tokenize`] consumes it.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The line/column of `pos`.
    location: Position,
    tokens: Vec<Token>,
    identifiers: IdentifierTable,
    errors: Vec<LexicalError>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            location: Position::default(),
            tokens: Vec::new(),
            identifiers: IdentifierTable::new(),
            errors: Vec::new(),
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        self.location = if c == '\n' {
            self.location.next_line()
        } else {
            self.location.next_column()
        };
        Some(c)
    }

    fn advance_by(&mut self, chars: usize) {
        for _ in 0..chars {
            self.advance();
        }
    }

    fn push_token(&mut self, kind: TokenKind, lexeme: impl Into<String>, start: Position) {
        self.tokens.push(Token::new(kind, lexeme, start));
    }

    fn push_error(&mut self, error: LexicalError) {
        trace!(%error, "lexical error");
        self.errors.push(error);
    }

    /// Skips a `--` comment up to, not including, the newline.
    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
    }

    /// Skips a bracketed comment. An unterminated one swallows the rest of
    /// the input.
    fn skip_block_comment(&mut self, open: &str, close: &str, start: Position) {
        self.advance_by(open.chars().count());
        while self.peek().is_some() {
            if self.input[self.pos..].starts_with(close) {
                self.advance_by(close.chars().count());
                return;
            }
            self.advance();
        }
        self.push_error(LexicalError::UnclosedComment { position: start });
    }

    /// Scans a single-quoted string literal; `''` stands for one quote.
    fn scan_string(&mut self, start: Position) {
        self.advance(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.peek() {
                Some('\'') => {
                    if self.peek_next() == Some('\'') {
                        value.push('\'');
                        self.advance_by(2);
                    } else {
                        self.advance();
                        break;
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
                None => {
                    self.push_error(LexicalError::UnclosedString { position: start });
                    break;
                }
            }
        }

        self.push_token(TokenKind::String, value, start);
    }

    /// Scans digits with at most one decimal point. A second point ends the
    /// literal and is scanned as a separate token.
    fn scan_number(&mut self, start: Position) {
        let begin = self.pos;
        let mut seen_dot = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let input = self.input;
        self.push_token(TokenKind::Number, &input[begin..self.pos], start);
    }

    /// Scans a keyword or an identifier.
    fn scan_word(&mut self, start: Position) {
        let begin = self.pos;
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let input = self.input;
        let text = &input[begin..self.pos];

        if let Some(keyword) = Keyword::from_str(text) {
            self.push_token(TokenKind::Keyword(keyword), text, start);
            return;
        }

        // A miscased keyword is reported but still scanned as an identifier.
        if Keyword::from_str_ignore_case(text).is_some() {
            self.push_error(LexicalError::KeywordCase {
                word: String::from(text),
                position: start,
            });
        }

        self.identifiers
            .entry(String::from(text))
            .or_insert_with(|| IdentifierEntry::first_seen_at(start))
            .count += 1;
        self.push_token(TokenKind::Identifier, text, start);
    }

    /// Scans an operator or delimiter, preferring the two-character forms.
    fn scan_symbol(&mut self, c: char, start: Position) {
        let compound = match (c, self.peek_next()) {
            ('!', Some('=')) => Some((TokenKind::NotEq, "!=")),
            ('<', Some('=')) => Some((TokenKind::LtEq, "<=")),
            ('>', Some('=')) => Some((TokenKind::GtEq, ">=")),
            _ => None,
        };

        if let Some((kind, lexeme)) = compound {
            self.advance_by(2);
            self.push_token(kind, lexeme, start);
            return;
        }

        self.advance();
        match TokenKind::from_symbol(c) {
            Some(kind) => self.push_token(kind, c, start),
            None => self.push_error(LexicalError::InvalidCharacter {
                character: c,
                position: start,
            }),
        }
    }

    /// Tokenizes the entire input.
    ///
    /// Never fails: problems are collected in [`Lexed::errors`] and scanning
    /// carries on until the input is exhausted.
    #[must_use]
    pub fn tokenize(mut self) -> Lexed {
        while let Some(c) = self.peek() {
            let start = self.location;
            let rest = &self.input[self.pos..];

            if matches!(c, ' ' | '\t' | '\n' | '\r') {
                self.advance();
            } else if rest.starts_with("--") {
                self.skip_line_comment();
            } else if let Some((open, close)) =
                BLOCK_COMMENTS.iter().find(|(open, _)| rest.starts_with(open))
            {
                self.skip_block_comment(open, close, start);
            } else if c == '\'' {
                self.scan_string(start);
            } else if c.is_ascii_digit() {
                self.scan_number(start);
            } else if c.is_alphabetic() || c == '_' {
                self.scan_word(start);
            } else {
                self.scan_symbol(c, start);
            }
        }

        debug!(
            tokens = self.tokens.len(),
            identifiers = self.identifiers.len(),
            errors = self.errors.len(),
            "scan complete"
        );

        Lexed {
            tokens: self.tokens,
            identifiers: self.identifiers,
            errors: self.errors,
        }
    }
}
