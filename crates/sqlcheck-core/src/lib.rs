//! # sqlcheck-core
//!
//! A compiler front end for a small SQL-like language: it scans, parses and
//! type-checks source text and reports every lexical, syntax and semantic
//! problem it finds. Nothing is executed.
//!
//! This crate provides:
//! - A hand-written scanner producing tokens and an identifier table
//! - A recursive descent parser with panic-mode recovery, building a
//!   concrete syntax tree that keeps every terminal
//! - A two-pass semantic analyzer with a table/column schema and literal
//!   type checks
//!
//! ## Example
//!
//! ```rust
//! let analysis = sqlcheck_core::analyze(
//!     "CREATE TABLE users (id INT, name TEXT);
//!      INSERT INTO users VALUES (1, 'Ann');
//!      SELECT name FROM users WHERE id = 'one';",
//! );
//!
//! assert!(!analysis.is_success());
//! assert_eq!(
//!     analysis.semantic.errors[0].to_string(),
//!     "Semantic Error: Type mismatch at line 3, column 40. \
//!      Column 'id' is defined as INT, but a STRING literal was used in comparison."
//! );
//! ```
//!
//! Each phase can also be driven on its own:
//!
//! ```rust
//! use sqlcheck_core::{Lexer, Parser, SemanticAnalyzer};
//!
//! let lexed = Lexer::new("DELETE FROM t;").tokenize();
//! let parsed = Parser::new(&lexed.tokens).parse();
//! let output = SemanticAnalyzer::new(&parsed.tree, &lexed.tokens).analyze();
//! assert_eq!(output.errors.len(), 1);
//! ```
//!
//! Every phase is single-use: `tokenize`, `parse` and `analyze` consume their
//! receiver. Nothing is shared between analyses, so independent analyses may
//! run on different threads.

pub mod cst;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod semantic;

pub use cst::{Node, Query};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{Parsed, Parser, SyntaxError};
pub use report::{Analysis, AnalysisReport, Diagnostic, Severity};
pub use semantic::{Schema, SemanticAnalyzer, SemanticError, SemanticOutput};

/// Runs the full pipeline over one source text.
#[must_use]
pub fn analyze(source: &str) -> Analysis {
    Analysis::run(source)
}
