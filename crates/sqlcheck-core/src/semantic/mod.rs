//! Semantic analysis
//!
//! Builds the schema table from CREATE TABLE statements and checks data
//! manipulation statements against it.

mod analyzer;
mod annotate;
mod error;
mod schema;

pub use analyzer::{SemanticAnalyzer, SemanticOutput, TokenIndex};
pub use annotate::annotated_tree;
pub use error::{CheckSite, SemanticError};
pub use schema::{ColumnType, Schema, TableSchema};
