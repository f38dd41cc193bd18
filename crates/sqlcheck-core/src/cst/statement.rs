//! Statement tree types.

use super::condition::Condition;
use super::expression::{Expression, ExpressionList, ValueList};
use super::node::{Chain, Node, TypeHint};
use crate::lexer::Token;

/// The root of a parse: every statement in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Statements and recovery placeholders, in source order.
    pub items: Vec<QueryItem>,
}

impl Query {
    /// Iterates over the well-formed statements.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.items.iter().filter_map(|item| match item {
            QueryItem::Statement(statement) => Some(statement),
            QueryItem::Error(_) => None,
        })
    }
}

impl Node for Query {
    fn label(&self) -> String {
        String::from("Query")
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.items.iter().map(|item| item as &dyn Node).collect()
    }
}

/// A top-level entry of a [`Query`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryItem {
    /// A statement that parsed cleanly.
    Statement(Statement),
    /// Tokens discarded while recovering from a syntax error.
    Error(ErrorNode),
}

impl Node for QueryItem {
    fn label(&self) -> String {
        match self {
            Self::Statement(statement) => statement.label(),
            Self::Error(error) => error.label(),
        }
    }

    fn children(&self) -> Vec<&dyn Node> {
        match self {
            Self::Statement(statement) => statement.children(),
            Self::Error(error) => error.children(),
        }
    }
}

/// Placeholder for a statement that failed to parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorNode {
    /// The tokens skipped from the start of the statement to the
    /// synchronization point.
    pub skipped: Vec<Token>,
}

impl Node for ErrorNode {
    fn label(&self) -> String {
        String::from("Error")
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.skipped.iter().map(|token| token as &dyn Node).collect()
    }
}

/// A statement with its terminating semicolon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// The statement proper.
    pub body: StatementBody,
    /// The `;` token.
    pub semicolon: Token,
}

impl Node for Statement {
    fn label(&self) -> String {
        String::from("Statement")
    }

    fn children(&self) -> Vec<&dyn Node> {
        vec![&self.body, &self.semicolon]
    }
}

/// The five statement forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementBody {
    /// CREATE TABLE.
    Create(CreateStmt),
    /// INSERT INTO ... VALUES.
    Insert(InsertStmt),
    /// SELECT ... FROM.
    Select(SelectStmt),
    /// UPDATE ... SET.
    Update(UpdateStmt),
    /// DELETE FROM.
    Delete(DeleteStmt),
}

impl StatementBody {
    fn as_node(&self) -> &dyn Node {
        match self {
            Self::Create(stmt) => stmt,
            Self::Insert(stmt) => stmt,
            Self::Select(stmt) => stmt,
            Self::Update(stmt) => stmt,
            Self::Delete(stmt) => stmt,
        }
    }

    /// The table the statement targets.
    #[must_use]
    pub const fn table(&self) -> &Token {
        match self {
            Self::Create(stmt) => &stmt.name,
            Self::Insert(stmt) => &stmt.table,
            Self::Select(stmt) => &stmt.table,
            Self::Update(stmt) => &stmt.table,
            Self::Delete(stmt) => &stmt.table,
        }
    }
}

impl Node for StatementBody {
    fn label(&self) -> String {
        self.as_node().label()
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.as_node().children()
    }
}

/// `CREATE TABLE name ( columns )`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateStmt {
    /// `CREATE`.
    pub create: Token,
    /// `TABLE`.
    pub table_kw: Token,
    /// The table name.
    pub name: Token,
    /// `(`.
    pub lparen: Token,
    /// Column definitions.
    pub columns: ColumnList,
    /// `)`.
    pub rparen: Token,
}

impl Node for CreateStmt {
    fn label(&self) -> String {
        String::from("CreateStmt")
    }

    fn children(&self) -> Vec<&dyn Node> {
        vec![
            &self.create,
            &self.table_kw,
            &self.name,
            &self.lparen,
            &self.columns,
            &self.rparen,
        ]
    }
}

/// A column name and its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDef {
    /// The column name.
    pub name: Token,
    /// The declared type.
    pub data_type: DataType,
}

impl Node for ColumnDef {
    fn label(&self) -> String {
        String::from("ColumnDef")
    }

    fn children(&self) -> Vec<&dyn Node> {
        vec![&self.name, &self.data_type]
    }
}

/// The type word of a column definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataType(pub Token);

impl DataType {
    /// The type as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0.lexeme
    }
}

impl Node for DataType {
    fn label(&self) -> String {
        format!("DataType({})", self.0.lexeme)
    }

    fn children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }

    fn type_hint(&self) -> Option<TypeHint<'_>> {
        Some(TypeHint::Declared(&self.0.lexeme))
    }
}

/// Comma-separated column definitions.
pub type ColumnList = Chain<ColumnDef>;

impl Node for ColumnList {
    fn label(&self) -> String {
        String::from("ColumnList")
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.interleaved()
    }
}

/// `INSERT INTO table VALUES ( values )`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStmt {
    /// `INSERT`.
    pub insert: Token,
    /// `INTO`.
    pub into: Token,
    /// The target table.
    pub table: Token,
    /// `VALUES`.
    pub values_kw: Token,
    /// `(`.
    pub lparen: Token,
    /// The literal values.
    pub values: ValueList,
    /// `)`.
    pub rparen: Token,
}

impl Node for InsertStmt {
    fn label(&self) -> String {
        String::from("InsertStmt")
    }

    fn children(&self) -> Vec<&dyn Node> {
        vec![
            &self.insert,
            &self.into,
            &self.table,
            &self.values_kw,
            &self.lparen,
            &self.values,
            &self.rparen,
        ]
    }
}

/// `SELECT list FROM table [WHERE condition]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStmt {
    /// `SELECT`.
    pub select: Token,
    /// `*` or the selected expressions.
    pub list: SelectList,
    /// `FROM`.
    pub from: Token,
    /// The source table.
    pub table: Token,
    /// Optional WHERE clause.
    pub where_clause: Option<WhereClause>,
}

impl Node for SelectStmt {
    fn label(&self) -> String {
        String::from("SelectStmt")
    }

    fn children(&self) -> Vec<&dyn Node> {
        let mut nodes: Vec<&dyn Node> = vec![&self.select, &self.list, &self.from, &self.table];
        if let Some(where_clause) = &self.where_clause {
            nodes.push(where_clause);
        }
        nodes
    }
}

/// What a SELECT returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectList {
    /// `*`.
    Star(Token),
    /// Explicit expressions.
    Expressions(ExpressionList),
}

impl Node for SelectList {
    fn label(&self) -> String {
        String::from("SelectList")
    }

    fn children(&self) -> Vec<&dyn Node> {
        match self {
            Self::Star(star) => vec![star],
            Self::Expressions(list) => vec![list],
        }
    }
}

/// `UPDATE table SET assignments [WHERE condition]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStmt {
    /// `UPDATE`.
    pub update: Token,
    /// The target table.
    pub table: Token,
    /// `SET`.
    pub set: Token,
    /// The assignments.
    pub assignments: AssignmentList,
    /// Optional WHERE clause.
    pub where_clause: Option<WhereClause>,
}

impl Node for UpdateStmt {
    fn label(&self) -> String {
        String::from("UpdateStmt")
    }

    fn children(&self) -> Vec<&dyn Node> {
        let mut nodes: Vec<&dyn Node> = vec![&self.update, &self.table, &self.set, &self.assignments];
        if let Some(where_clause) = &self.where_clause {
            nodes.push(where_clause);
        }
        nodes
    }
}

/// `column = expression`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// The assigned column.
    pub column: Token,
    /// `=`.
    pub eq: Token,
    /// The new value.
    pub value: Expression,
}

impl Node for Assignment {
    fn label(&self) -> String {
        String::from("Assignment")
    }

    fn children(&self) -> Vec<&dyn Node> {
        vec![&self.column, &self.eq, &self.value]
    }
}

/// Comma-separated assignments.
pub type AssignmentList = Chain<Assignment>;

impl Node for AssignmentList {
    fn label(&self) -> String {
        String::from("AssignmentList")
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.interleaved()
    }
}

/// `DELETE FROM table [WHERE condition]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStmt {
    /// `DELETE`.
    pub delete: Token,
    /// `FROM`.
    pub from: Token,
    /// The target table.
    pub table: Token,
    /// Optional WHERE clause.
    pub where_clause: Option<WhereClause>,
}

impl Node for DeleteStmt {
    fn label(&self) -> String {
        String::from("DeleteStmt")
    }

    fn children(&self) -> Vec<&dyn Node> {
        let mut nodes: Vec<&dyn Node> = vec![&self.delete, &self.from, &self.table];
        if let Some(where_clause) = &self.where_clause {
            nodes.push(where_clause);
        }
        nodes
    }
}

/// `WHERE condition`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    /// `WHERE`.
    pub where_kw: Token,
    /// The condition.
    pub condition: Condition,
}

impl Node for WhereClause {
    fn label(&self) -> String {
        String::from("WhereClause")
    }

    fn children(&self) -> Vec<&dyn Node> {
        vec![&self.where_kw, &self.condition]
    }
}
