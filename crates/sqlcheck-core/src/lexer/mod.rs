//! Lexer
//!
//! A hand-written scanner that turns source text into tokens, an identifier
//! occurrence table and lexical errors.

mod error;
mod position;
mod token;
mod tokenizer;

pub use error::LexicalError;
pub use position::Position;
pub use token::{Keyword, Token, TokenKind, TokenTuple};
pub use tokenizer::{IdentifierEntry, IdentifierTable, Lexed, Lexer};
