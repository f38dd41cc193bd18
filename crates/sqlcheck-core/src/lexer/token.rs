//! Token types for the lexer.

use serde::Serialize;

use super::Position;

/// Reserved words of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    // Queries
    Select,
    From,
    Where,

    // Data manipulation
    Insert,
    Into,
    Values,
    Update,
    Set,
    Delete,

    // Data definition
    Create,
    Table,

    // Column types
    Int,
    Float,
    Text,

    // Logical operators
    And,
    Or,
    Not,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Self; 17] = [
        Self::Select,
        Self::From,
        Self::Where,
        Self::Insert,
        Self::Into,
        Self::Values,
        Self::Update,
        Self::Set,
        Self::Delete,
        Self::Create,
        Self::Table,
        Self::Int,
        Self::Float,
        Self::Text,
        Self::And,
        Self::Or,
        Self::Not,
    ];

    /// Parses a keyword from its canonical spelling.
    ///
    /// Keywords are case-sensitive: only the uppercase form matches.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SELECT" => Some(Self::Select),
            "FROM" => Some(Self::From),
            "WHERE" => Some(Self::Where),
            "INSERT" => Some(Self::Insert),
            "INTO" => Some(Self::Into),
            "VALUES" => Some(Self::Values),
            "UPDATE" => Some(Self::Update),
            "SET" => Some(Self::Set),
            "DELETE" => Some(Self::Delete),
            "CREATE" => Some(Self::Create),
            "TABLE" => Some(Self::Table),
            "INT" => Some(Self::Int),
            "FLOAT" => Some(Self::Float),
            "TEXT" => Some(Self::Text),
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            _ => None,
        }
    }

    /// Matches a word against the keywords ignoring ASCII case.
    #[must_use]
    pub fn from_str_ignore_case(s: &str) -> Option<Self> {
        Self::from_str(&s.to_ascii_uppercase())
    }

    /// Returns the keyword as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::From => "FROM",
            Self::Where => "WHERE",
            Self::Insert => "INSERT",
            Self::Into => "INTO",
            Self::Values => "VALUES",
            Self::Update => "UPDATE",
            Self::Set => "SET",
            Self::Delete => "DELETE",
            Self::Create => "CREATE",
            Self::Table => "TABLE",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Text => "TEXT",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
        }
    }

    /// Returns true for the keywords that open a statement.
    #[must_use]
    pub const fn starts_statement(&self) -> bool {
        matches!(
            self,
            Self::Create | Self::Insert | Self::Select | Self::Update | Self::Delete
        )
    }

    /// Returns true for the column type keywords.
    #[must_use]
    pub const fn is_data_type(&self) -> bool {
        matches!(self, Self::Int | Self::Float | Self::Text)
    }
}

/// The kind of token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Literals
    /// String literal (e.g., 'hello')
    String,
    /// Numeric literal (e.g., 42 or 3.14)
    Number,

    // Identifiers and keywords
    /// Identifier (e.g., column_name)
    Identifier,
    /// Reserved keyword
    Keyword(Keyword),

    // Operators
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Star,
    /// /
    Slash,
    /// %
    Percent,
    /// =
    Eq,
    /// !=
    NotEq,
    /// <
    Lt,
    /// <=
    LtEq,
    /// >
    Gt,
    /// >=
    GtEq,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// ,
    Comma,
    /// ;
    Semicolon,
    /// .
    Dot,
}

impl TokenKind {
    /// Returns the name used for this kind in reports and diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "STRING_LITERAL",
            Self::Number => "NUMBER_LITERAL",
            Self::Identifier => "IDENTIFIER",
            Self::Keyword(kw) => kw.as_str(),
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "MULTIPLY",
            Self::Slash => "DIVIDE",
            Self::Percent => "MODULO",
            Self::Eq => "EQUAL",
            Self::NotEq => "NOT_EQUAL",
            Self::Lt => "LESS_THAN",
            Self::LtEq => "LESS_EQUAL",
            Self::Gt => "GREATER_THAN",
            Self::GtEq => "GREATER_EQUAL",
            Self::LeftParen => "LPAREN",
            Self::RightParen => "RPAREN",
            Self::Comma => "COMMA",
            Self::Semicolon => "SEMICOLON",
            Self::Dot => "DOT",
        }
    }

    /// Looks up the kind of a single-character operator or delimiter.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            '%' => Some(Self::Percent),
            '=' => Some(Self::Eq),
            '<' => Some(Self::Lt),
            '>' => Some(Self::Gt),
            '(' => Some(Self::LeftParen),
            ')' => Some(Self::RightParen),
            ',' => Some(Self::Comma),
            ';' => Some(Self::Semicolon),
            '.' => Some(Self::Dot),
            _ => None,
        }
    }

    /// Returns true for the comparison operators.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Eq | Self::NotEq | Self::Lt | Self::LtEq | Self::Gt | Self::GtEq
        )
    }
}

/// A token with its text and location in the source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The token text. String literals hold their unescaped content.
    pub lexeme: String,
    /// Where the token starts.
    pub position: Position,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Returns true if this token may open a statement.
    #[must_use]
    pub fn starts_statement(&self) -> bool {
        self.as_keyword().is_some_and(|kw| kw.starts_statement())
    }

    /// Renders the token as the `(kind, lexeme, line, column)` tuple of the
    /// report contract.
    #[must_use]
    pub fn to_tuple(&self) -> TokenTuple {
        TokenTuple(
            self.kind.name(),
            self.lexeme.clone(),
            self.position.line,
            self.position.column,
        )
    }
}

/// Serialized form of a token: `(kind, lexeme, line, column)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenTuple(pub &'static str, pub String, pub usize, pub usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_from_str_is_case_sensitive() {
        assert_eq!(Keyword::from_str("SELECT"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str("select"), None);
        assert_eq!(Keyword::from_str("SeLeCt"), None);
        assert_eq!(Keyword::from_str("not_a_keyword"), None);
    }

    #[test]
    fn test_keyword_from_str_ignore_case() {
        assert_eq!(Keyword::from_str_ignore_case("select"), Some(Keyword::Select));
        assert_eq!(Keyword::from_str_ignore_case("Table"), Some(Keyword::Table));
        assert_eq!(Keyword::from_str_ignore_case("tables"), None);
    }

    #[test]
    fn test_keyword_round_trip() {
        for kw in Keyword::ALL {
            assert_eq!(Keyword::from_str(kw.as_str()), Some(kw));
        }
    }

    #[test]
    fn test_statement_leaders() {
        let leaders: Vec<_> = Keyword::ALL
            .into_iter()
            .filter(Keyword::starts_statement)
            .collect();
        assert_eq!(
            leaders,
            vec![
                Keyword::Select,
                Keyword::Insert,
                Keyword::Update,
                Keyword::Delete,
                Keyword::Create,
            ]
        );
        assert!(!Keyword::From.starts_statement());
    }

    #[test]
    fn test_token_kind_names() {
        assert_eq!(TokenKind::Keyword(Keyword::Where).name(), "WHERE");
        assert_eq!(TokenKind::Star.name(), "MULTIPLY");
        assert_eq!(TokenKind::GtEq.name(), "GREATER_EQUAL");
        assert_eq!(TokenKind::String.name(), "STRING_LITERAL");
    }

    #[test]
    fn test_token_as_keyword() {
        let select = Token::new(TokenKind::Keyword(Keyword::Select), "SELECT", Position::default());
        let plus = Token::new(TokenKind::Plus, "+", Position::default());
        assert_eq!(select.as_keyword(), Some(Keyword::Select));
        assert!(select.starts_statement());
        assert_eq!(plus.as_keyword(), None);
        assert!(!plus.starts_statement());
    }

    #[test]
    fn test_token_tuple() {
        let token = Token::new(TokenKind::Identifier, "users", Position::new(2, 5));
        assert_eq!(
            token.to_tuple(),
            TokenTuple("IDENTIFIER", String::from("users"), 2, 5)
        );
    }
}
