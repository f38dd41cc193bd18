//! Parser
//!
//! A hand-written recursive descent parser with panic-mode recovery. It
//! builds the concrete syntax tree of [`crate::cst`] from the scanner's
//! tokens.

mod error;
mod parser;

pub use error::{Expected, SyntaxError};
pub use parser::{Parsed, Parser, MAX_NESTING};
