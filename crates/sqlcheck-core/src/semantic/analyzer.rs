//! Two-pass semantic analysis over a parsed query.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::error::{CheckSite, SemanticError};
use super::schema::{ColumnType, Schema, TableSchema};
use crate::cst::{
    Comparison, Condition, CreateStmt, DeleteStmt, Factor, InsertStmt, LiteralRef, Predicate,
    Query, SelectList, SelectStmt, StatementBody, UpdateStmt, WhereClause,
};
use crate::lexer::{Position, Token};

/// Maps each lexeme to the position of its first occurrence in the token
/// stream.
///
/// Diagnostics are positioned by lexeme, so a name reported in a later
/// statement points at its first appearance in the source.
#[derive(Debug, Clone, Default)]
pub struct TokenIndex {
    first_seen: HashMap<String, Position>,
}

impl TokenIndex {
    /// Indexes a token stream.
    #[must_use]
    pub fn new(tokens: &[Token]) -> Self {
        let mut first_seen = HashMap::new();
        for token in tokens {
            first_seen
                .entry(token.lexeme.clone())
                .or_insert(token.position);
        }
        Self { first_seen }
    }

    /// Position of the first token with this lexeme, or line 0, column 0
    /// when there is none.
    #[must_use]
    pub fn position_of(&self, lexeme: &str) -> Position {
        self.first_seen
            .get(lexeme)
            .copied()
            .unwrap_or_else(Position::unknown)
    }
}

/// The result of semantic analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticOutput {
    /// Semantic errors in the order they were found.
    pub errors: Vec<SemanticError>,
    /// The schema after every CREATE TABLE was processed.
    pub schema: Schema,
}

/// Checks a parsed query against the schema it declares.
///
/// The first pass registers every CREATE TABLE, so statements may refer to
/// tables declared later in the source. The second pass checks INSERT,
/// SELECT, UPDATE and DELETE in source order. Error placeholders left by
/// the parser are ignored.
pub struct SemanticAnalyzer<'a> {
    tree: &'a Query,
    index: TokenIndex,
    schema: Schema,
    errors: Vec<SemanticError>,
}

impl<'a> SemanticAnalyzer<'a> {
    /// Creates an analyzer for a tree and the tokens it was parsed from.
    #[must_use]
    pub fn new(tree: &'a Query, tokens: &[Token]) -> Self {
        Self {
            tree,
            index: TokenIndex::new(tokens),
            schema: Schema::new(),
            errors: Vec::new(),
        }
    }

    /// Runs both passes.
    #[must_use]
    pub fn analyze(mut self) -> SemanticOutput {
        let tree = self.tree;

        for statement in tree.statements() {
            if let StatementBody::Create(create) = &statement.body {
                self.declare_table(create);
            }
        }
        debug!(tables = self.schema.len(), "declarations registered");

        for statement in tree.statements() {
            match &statement.body {
                StatementBody::Create(_) => {}
                StatementBody::Insert(insert) => self.check_insert(insert),
                StatementBody::Select(select) => self.check_select(select),
                StatementBody::Update(update) => self.check_update(update),
                StatementBody::Delete(delete) => self.check_delete(delete),
            }
        }
        debug!(errors = self.errors.len(), "semantic analysis complete");

        SemanticOutput {
            errors: self.errors,
            schema: self.schema,
        }
    }

    fn report(&mut self, error: SemanticError) {
        trace!(%error, "semantic error");
        self.errors.push(error);
    }

    fn position_of(&self, lexeme: &str) -> Position {
        self.index.position_of(lexeme)
    }

    // Pass 1

    fn declare_table(&mut self, create: &CreateStmt) {
        let name = &create.name.lexeme;
        if self.schema.contains(name) {
            self.report(SemanticError::DuplicateTable {
                table: name.clone(),
                position: self.position_of(name),
            });
            return;
        }

        let mut table = TableSchema::new(name.as_str());
        for column in create.columns.items() {
            let ty = ColumnType::parse(column.data_type.as_str());
            if !ty.is_valid() {
                self.report(SemanticError::InvalidDataType {
                    data_type: ty.to_string(),
                    position: self.position_of(ty.as_str()),
                });
            }
            table.add_column(column.name.lexeme.as_str(), ty);
        }
        trace!(table = %name, columns = table.len(), "table registered");
        self.schema.register(table);
    }

    // Pass 2

    /// Looks up the statement's table, reporting it when undeclared.
    fn resolve_table(&mut self, name: &Token) -> Option<TableSchema> {
        let table = self.schema.table(&name.lexeme).cloned();
        if table.is_none() {
            self.report(SemanticError::UndeclaredTable {
                table: name.lexeme.clone(),
                position: self.position_of(&name.lexeme),
            });
        }
        table
    }

    fn check_insert(&mut self, insert: &InsertStmt) {
        let Some(table) = self.resolve_table(&insert.table) else {
            return;
        };

        if insert.values.len() != table.len() {
            self.report(SemanticError::ArityMismatch {
                table: table.name().to_string(),
                expected: table.len(),
                provided: insert.values.len(),
                position: self.position_of(table.name()),
            });
            return;
        }

        for ((column, ty), value) in table.columns().zip(insert.values.items()) {
            self.check_literal(column, ty, value.as_literal(), CheckSite::Insert);
        }
    }

    fn check_select(&mut self, select: &SelectStmt) {
        let Some(table) = self.resolve_table(&select.table) else {
            return;
        };

        if let SelectList::Expressions(list) = &select.list {
            let mut referenced = Vec::new();
            for expr in list.items() {
                expr.for_each_factor(&mut |factor| {
                    if let Some(ident) = factor.as_identifier() {
                        referenced.push(ident);
                    }
                });
            }
            for ident in referenced {
                self.check_column_exists(&table, ident);
            }
        }

        self.check_where(&table, select.where_clause.as_ref());
    }

    fn check_update(&mut self, update: &UpdateStmt) {
        let Some(table) = self.resolve_table(&update.table) else {
            return;
        };

        for assignment in update.assignments.items() {
            let Some(ty) = self.check_column_exists(&table, &assignment.column) else {
                continue;
            };
            // Only a lone literal is typed; arithmetic is not inferred.
            if let Some(literal) = assignment
                .value
                .as_single_factor()
                .and_then(Factor::as_literal)
            {
                self.check_literal(&assignment.column.lexeme, ty, literal, CheckSite::Update);
            }
        }

        self.check_where(&table, update.where_clause.as_ref());
    }

    fn check_delete(&mut self, delete: &DeleteStmt) {
        let Some(table) = self.resolve_table(&delete.table) else {
            return;
        };
        self.check_where(&table, delete.where_clause.as_ref());
    }

    fn check_where(&mut self, table: &TableSchema, where_clause: Option<&WhereClause>) {
        if let Some(where_clause) = where_clause {
            self.check_condition(table, &where_clause.condition);
        }
    }

    fn check_condition(&mut self, table: &TableSchema, condition: &Condition) {
        for and in condition.items() {
            for not in and.items() {
                match &not.predicate {
                    Predicate::Column(column) => {
                        self.check_column_exists(table, column);
                    }
                    Predicate::Comparison(comparison) => {
                        self.check_comparison(table, comparison);
                    }
                }
            }
        }
    }

    /// Checks `column op literal`. Comparisons that do not start with a
    /// column reference are not checked.
    fn check_comparison(&mut self, table: &TableSchema, comparison: &Comparison) {
        let Some(column) = comparison.left.first_factor().as_identifier() else {
            return;
        };
        let Some(ty) = self.check_column_exists(table, column) else {
            return;
        };
        if let Some(literal) = comparison.right.first_factor().as_literal() {
            self.check_literal(&column.lexeme, ty, literal, CheckSite::Comparison);
        }
    }

    /// Returns the column's type, reporting the column when the table does
    /// not define it.
    fn check_column_exists<'t>(
        &mut self,
        table: &'t TableSchema,
        column: &Token,
    ) -> Option<&'t ColumnType> {
        let ty = table.column(&column.lexeme);
        if ty.is_none() {
            self.report(SemanticError::UnknownColumn {
                column: column.lexeme.clone(),
                table: table.name().to_string(),
                position: self.position_of(&column.lexeme),
            });
        }
        ty
    }

    fn check_literal(
        &mut self,
        column: &str,
        ty: &ColumnType,
        literal: LiteralRef<'_>,
        site: CheckSite,
    ) {
        if ty.accepts(literal) {
            return;
        }
        self.report(SemanticError::TypeMismatch {
            column: column.to_string(),
            declared: ty.clone(),
            literal: literal.kind,
            site,
            position: self.position_of(&literal.token.lexeme),
        });
    }
}
