//! The schema table built from CREATE TABLE statements.

use std::fmt::{self, Write as _};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::cst::{LiteralKind, LiteralRef};

/// A declared column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// `INT`
    Int,
    /// `FLOAT`
    Float,
    /// `TEXT`
    Text,
    /// Any other type word. Recorded as written so later checks can still
    /// see the column; it accepts no literal.
    Invalid(String),
}

impl ColumnType {
    /// Reads a type word.
    #[must_use]
    pub fn parse(word: &str) -> Self {
        match word {
            "INT" => Self::Int,
            "FLOAT" => Self::Float,
            "TEXT" => Self::Text,
            other => Self::Invalid(other.to_string()),
        }
    }

    /// Returns the type as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Text => "TEXT",
            Self::Invalid(word) => word,
        }
    }

    /// Returns true for INT, FLOAT and TEXT.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    /// Whether a literal may be stored in, assigned to or compared with a
    /// column of this type.
    ///
    /// INT takes numbers without a decimal point, FLOAT any number, TEXT only
    /// strings.
    #[must_use]
    pub fn accepts(&self, literal: LiteralRef<'_>) -> bool {
        match (self, literal.kind) {
            (Self::Int, LiteralKind::Number) => !literal.token.lexeme.contains('.'),
            (Self::Float, LiteralKind::Number) | (Self::Text, LiteralKind::String) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ColumnType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A registered table and its columns in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    name: String,
    columns: Vec<(String, ColumnType)>,
}

impl TableSchema {
    /// Creates a table with no columns.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Adds a column. Redeclaring a column replaces its type in place.
    pub fn add_column(&mut self, name: impl Into<String>, ty: ColumnType) {
        let name = name.into();
        match self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, existing)) => *existing = ty,
            None => self.columns.push((name, ty)),
        }
    }

    /// The table name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in declaration order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnType)> {
        self.columns.iter().map(|(name, ty)| (name.as_str(), ty))
    }

    /// Looks up a column's type.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnType> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, ty)| ty)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for TableSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, ty) in &self.columns {
            map.serialize_entry(name, ty)?;
        }
        map.end()
    }
}

/// Every registered table, in declaration order.
///
/// Serializes as `{table: {column: type}}` with both levels kept in
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    tables: Vec<TableSchema>,
}

impl Schema {
    /// Creates an empty schema.
    #[must_use]
    pub const fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Registers a table. Returns false, leaving the schema untouched, when
    /// the name is already taken.
    pub fn register(&mut self, table: TableSchema) -> bool {
        if self.contains(table.name()) {
            return false;
        }
        self.tables.push(table);
        true
    }

    /// Returns true if a table with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.table(name).is_some()
    }

    /// Looks up a table.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Tables in declaration order.
    pub fn tables(&self) -> impl Iterator<Item = &TableSchema> {
        self.tables.iter()
    }

    /// Type of the named column in the first table that declares it.
    #[must_use]
    pub fn find_column(&self, column: &str) -> Option<&ColumnType> {
        self.tables.iter().find_map(|table| table.column(column))
    }

    /// Number of tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if no table is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Text listing of every table and its columns.
    #[must_use]
    pub fn dump(&self) -> String {
        if self.is_empty() {
            return String::from("Symbol Table is empty.\n");
        }
        let mut out = String::from("\n=== Symbol Table ===\n");
        for table in &self.tables {
            let _ = write!(out, "\nTable: {}\n  Columns:\n", table.name);
            for (name, ty) in table.columns() {
                let _ = writeln!(out, "    {name}: {ty}");
            }
        }
        out
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tables.len()))?;
        for table in &self.tables {
            map.serialize_entry(table.name(), table)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{Position, Token, TokenKind};

    fn literal(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, Position::default())
    }

    fn accepts(ty: &ColumnType, token: &Token) -> bool {
        let kind = LiteralKind::of(token.kind).expect("literal token");
        ty.accepts(LiteralRef { kind, token })
    }

    fn users() -> TableSchema {
        let mut table = TableSchema::new("users");
        table.add_column("id", ColumnType::Int);
        table.add_column("name", ColumnType::Text);
        table
    }

    #[test]
    fn test_column_type_parse() {
        assert_eq!(ColumnType::parse("FLOAT"), ColumnType::Float);
        assert_eq!(
            ColumnType::parse("BOOL"),
            ColumnType::Invalid(String::from("BOOL"))
        );
        assert!(!ColumnType::parse("int").is_valid());
        assert_eq!(ColumnType::Invalid(String::from("X")).to_string(), "X");
    }

    #[test]
    fn test_compatibility_rule() {
        let int = literal(TokenKind::Number, "42");
        let real = literal(TokenKind::Number, "4.2");
        let text = literal(TokenKind::String, "42");

        assert!(accepts(&ColumnType::Int, &int));
        assert!(!accepts(&ColumnType::Int, &real));
        assert!(!accepts(&ColumnType::Int, &text));

        assert!(accepts(&ColumnType::Float, &int));
        assert!(accepts(&ColumnType::Float, &real));
        assert!(!accepts(&ColumnType::Float, &text));

        assert!(accepts(&ColumnType::Text, &text));
        assert!(!accepts(&ColumnType::Text, &int));

        let invalid = ColumnType::Invalid(String::from("BOOL"));
        assert!(!accepts(&invalid, &int));
        assert!(!accepts(&invalid, &text));
    }

    #[test]
    fn test_register_keeps_first_definition() {
        let mut schema = Schema::new();
        assert!(schema.register(users()));

        let mut other = TableSchema::new("users");
        other.add_column("email", ColumnType::Text);
        assert!(!schema.register(other));

        let table = schema.table("users").expect("registered");
        assert_eq!(table.len(), 2);
        assert!(table.column("email").is_none());
    }

    #[test]
    fn test_redeclared_column_replaces_type() {
        let mut table = users();
        table.add_column("id", ColumnType::Float);
        let columns: Vec<_> = table.columns().map(|(name, ty)| (name, ty.clone())).collect();
        assert_eq!(
            columns,
            vec![("id", ColumnType::Float), ("name", ColumnType::Text)]
        );
    }

    #[test]
    fn test_find_column_uses_first_table() {
        let mut schema = Schema::new();
        schema.register(users());
        let mut scores = TableSchema::new("scores");
        scores.add_column("id", ColumnType::Float);
        scores.add_column("points", ColumnType::Float);
        schema.register(scores);

        assert_eq!(schema.find_column("id"), Some(&ColumnType::Int));
        assert_eq!(schema.find_column("points"), Some(&ColumnType::Float));
        assert_eq!(schema.find_column("nope"), None);
    }

    #[test]
    fn test_dump() {
        assert_eq!(Schema::new().dump(), "Symbol Table is empty.\n");

        let mut schema = Schema::new();
        schema.register(users());
        assert_eq!(
            schema.dump(),
            "\n=== Symbol Table ===\n\nTable: users\n  Columns:\n    id: INT\n    name: TEXT\n"
        );
    }

    #[test]
    fn test_serialize_keeps_declaration_order() {
        let mut schema = Schema::new();
        let mut zeta = TableSchema::new("zeta");
        zeta.add_column("z", ColumnType::Text);
        zeta.add_column("a", ColumnType::Int);
        schema.register(zeta);
        schema.register(users());

        let json = serde_json::to_string(&schema).expect("serialize");
        assert_eq!(
            json,
            r#"{"zeta":{"z":"TEXT","a":"INT"},"users":{"id":"INT","name":"TEXT"}}"#
        );
    }
}
