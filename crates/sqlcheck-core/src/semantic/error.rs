//! Semantic error types.

use thiserror::Error;

use super::schema::ColumnType;
use crate::cst::LiteralKind;
use crate::lexer::Position;

/// The statement form in which a literal was type-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckSite {
    /// A value of `INSERT ... VALUES`.
    Insert,
    /// The right-hand side of an `UPDATE` assignment.
    Update,
    /// The right-hand side of a WHERE comparison.
    Comparison,
}

fn mismatch_detail(site: &CheckSite, literal: &LiteralKind) -> String {
    match site {
        CheckSite::Insert => format!(
            "a {} literal was provided for insertion.",
            literal.token_name()
        ),
        CheckSite::Update => format!("a {} was provided.", literal.token_name()),
        CheckSite::Comparison => format!(
            "a {} literal was used in comparison.",
            literal.short_name()
        ),
    }
}

/// A semantic error. The `Display` output is the user-facing diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemanticError {
    /// A CREATE TABLE for a name that is already registered.
    #[error("Semantic Error: Table '{table}' is already declared at {position}.")]
    DuplicateTable {
        /// The table name.
        table: String,
        /// Position of the name.
        position: Position,
    },

    /// A statement referring to a table that was never created.
    #[error("Semantic Error: Table '{table}' is not declared at {position}.")]
    UndeclaredTable {
        /// The table name.
        table: String,
        /// Position of the name.
        position: Position,
    },

    /// A column reference that the table does not define.
    #[error("Semantic Error: Column '{column}' does not exist in table '{table}' at {position}.")]
    UnknownColumn {
        /// The column name.
        column: String,
        /// The table searched.
        table: String,
        /// Position of the column name.
        position: Position,
    },

    /// A column declared with a type outside INT, FLOAT and TEXT.
    #[error("Semantic Error: Invalid data type '{data_type}' at {position}. Expected INT, FLOAT, or TEXT.")]
    InvalidDataType {
        /// The type as written.
        data_type: String,
        /// Position of the type.
        position: Position,
    },

    /// An INSERT whose value count differs from the column count.
    #[error("Semantic Error: Type mismatch at {position}. Table '{table}' expects {expected} values, but {provided} were provided.")]
    ArityMismatch {
        /// The table name.
        table: String,
        /// Number of declared columns.
        expected: usize,
        /// Number of values supplied.
        provided: usize,
        /// Position of the table name.
        position: Position,
    },

    /// A literal whose kind the column type does not accept.
    #[error(
        "Semantic Error: Type mismatch at {position}. Column '{column}' is defined as {declared}, but {}",
        mismatch_detail(.site, .literal)
    )]
    TypeMismatch {
        /// The column name.
        column: String,
        /// The column's declared type.
        declared: ColumnType,
        /// The kind of literal supplied.
        literal: LiteralKind,
        /// Where the check happened.
        site: CheckSite,
        /// Position of the literal.
        position: Position,
    },
}

impl SemanticError {
    /// Returns where the error was reported.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::DuplicateTable { position, .. }
            | Self::UndeclaredTable { position, .. }
            | Self::UnknownColumn { position, .. }
            | Self::InvalidDataType { position, .. }
            | Self::ArityMismatch { position, .. }
            | Self::TypeMismatch { position, .. } => *position,
        }
    }
}
