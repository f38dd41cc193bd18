//! Concrete syntax tree.
//!
//! One Rust type per grammar construct. Every matched terminal is kept as a
//! [`Token`](crate::lexer::Token) leaf so that the full derivation can be
//! rendered; [`Node`] gives printers a uniform view over all of them.

mod condition;
mod expression;
mod node;
mod render;
mod statement;

pub use condition::{AndCondition, Comparison, ComparisonOp, Condition, NotCondition, Predicate};
pub use expression::{
    Expression, ExpressionList, Factor, LiteralKind, LiteralRef, Term, Value, ValueList,
};
pub use node::{Chain, Node, TypeHint};
pub use render::{draw_tree, TreeText, TreeView};
pub use statement::{
    Assignment, AssignmentList, ColumnDef, ColumnList, CreateStmt, DataType, DeleteStmt,
    ErrorNode, InsertStmt, Query, QueryItem, SelectList, SelectStmt, Statement, StatementBody,
    UpdateStmt, WhereClause,
};
