//! Expression tree types.
//!
//! Precedence is carried by the layering: an [`Expression`] is a chain of
//! [`Term`]s joined by `+`/`-`, a [`Term`] a chain of [`Factor`]s joined by
//! `*`, `/` or `%`.

use super::node::{Chain, Node, TypeHint};
use crate::lexer::{Token, TokenKind};

/// The two literal kinds of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    /// A numeric literal.
    Number,
    /// A single-quoted string literal.
    String,
}

impl LiteralKind {
    /// Returns the literal kind of a token, if it is a literal.
    #[must_use]
    pub const fn of(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Number => Some(Self::Number),
            TokenKind::String => Some(Self::String),
            _ => None,
        }
    }

    /// The token kind name (`NUMBER_LITERAL`, `STRING_LITERAL`).
    #[must_use]
    pub const fn token_name(&self) -> &'static str {
        match self {
            Self::Number => "NUMBER_LITERAL",
            Self::String => "STRING_LITERAL",
        }
    }

    /// The short name (`NUMBER`, `STRING`).
    #[must_use]
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::String => "STRING",
        }
    }
}

/// A literal token together with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralRef<'a> {
    /// The literal kind.
    pub kind: LiteralKind,
    /// The literal token.
    pub token: &'a Token,
}

/// An operand of a [`Term`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Factor {
    /// A bare identifier, read as a column reference.
    Identifier(Token),
    /// A numeric literal.
    Number(Token),
    /// A string literal.
    String(Token),
    /// A parenthesized expression.
    Paren {
        /// The opening parenthesis.
        lparen: Token,
        /// The inner expression.
        expr: Box<Expression>,
        /// The closing parenthesis.
        rparen: Token,
    },
}

impl Factor {
    /// Returns the identifier token if this is a bare identifier.
    #[must_use]
    pub const fn as_identifier(&self) -> Option<&Token> {
        match self {
            Self::Identifier(token) => Some(token),
            _ => None,
        }
    }

    /// Returns the literal if this is a numeric or string literal.
    #[must_use]
    pub const fn as_literal(&self) -> Option<LiteralRef<'_>> {
        match self {
            Self::Number(token) => Some(LiteralRef {
                kind: LiteralKind::Number,
                token,
            }),
            Self::String(token) => Some(LiteralRef {
                kind: LiteralKind::String,
                token,
            }),
            _ => None,
        }
    }
}

impl Node for Factor {
    fn label(&self) -> String {
        match self {
            Self::Identifier(token) => format!("Factor(IDENTIFIER:{})", token.lexeme),
            Self::Number(token) => format!("Factor(NUMBER:{})", token.lexeme),
            Self::String(token) => format!("Factor(STRING:{})", token.lexeme),
            Self::Paren { .. } => String::from("Factor"),
        }
    }

    fn children(&self) -> Vec<&dyn Node> {
        match self {
            Self::Paren {
                lparen,
                expr,
                rparen,
            } => vec![lparen as &dyn Node, &**expr as &dyn Node, rparen as &dyn Node],
            _ => Vec::new(),
        }
    }

    fn type_hint(&self) -> Option<TypeHint<'_>> {
        match self {
            Self::Identifier(token) => Some(TypeHint::Column(&token.lexeme)),
            Self::Number(_) => Some(TypeHint::Number),
            Self::String(_) => Some(TypeHint::String),
            Self::Paren { .. } => None,
        }
    }
}

/// Factors joined by `*`, `/` or `%`.
pub type Term = Chain<Factor>;

/// Terms joined by `+` or `-`.
pub type Expression = Chain<Term>;

/// Comma-separated expressions.
pub type ExpressionList = Chain<Expression>;

impl Node for Term {
    fn label(&self) -> String {
        String::from("Term")
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.interleaved()
    }
}

impl Node for Expression {
    fn label(&self) -> String {
        String::from("Expression")
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.interleaved()
    }
}

impl Node for ExpressionList {
    fn label(&self) -> String {
        String::from("ExpressionList")
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.interleaved()
    }
}

impl Expression {
    /// The factor an expression starts with.
    #[must_use]
    pub const fn first_factor(&self) -> &Factor {
        &self.first.first
    }

    /// Returns the factor when the expression is exactly one factor with no
    /// operators.
    #[must_use]
    pub fn as_single_factor(&self) -> Option<&Factor> {
        self.single().and_then(Chain::single)
    }

    /// Visits every factor, descending into parenthesized expressions.
    pub fn for_each_factor<'a>(&'a self, visit: &mut impl FnMut(&'a Factor)) {
        for term in self.items() {
            for factor in term.items() {
                visit(factor);
                if let Factor::Paren { expr, .. } = factor {
                    expr.for_each_factor(visit);
                }
            }
        }
    }
}

/// A literal in an `INSERT ... VALUES` list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    /// The literal kind.
    pub kind: LiteralKind,
    /// The literal token.
    pub token: Token,
}

impl Value {
    /// Borrows the value as a literal.
    #[must_use]
    pub const fn as_literal(&self) -> LiteralRef<'_> {
        LiteralRef {
            kind: self.kind,
            token: &self.token,
        }
    }
}

impl Node for Value {
    fn label(&self) -> String {
        format!("Value({}:{})", self.kind.token_name(), self.token.lexeme)
    }

    fn children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }

    fn type_hint(&self) -> Option<TypeHint<'_>> {
        Some(match self.kind {
            LiteralKind::Number => TypeHint::Number,
            LiteralKind::String => TypeHint::String,
        })
    }
}

/// Comma-separated values.
pub type ValueList = Chain<Value>;

impl Node for ValueList {
    fn label(&self) -> String {
        String::from("ValueList")
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.interleaved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Position;

    fn token(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, Position::default())
    }

    fn factor_expr(factor: Factor) -> Expression {
        Chain::new(Chain::new(factor))
    }

    #[test]
    fn test_literal_kind_names() {
        assert_eq!(LiteralKind::Number.token_name(), "NUMBER_LITERAL");
        assert_eq!(LiteralKind::String.short_name(), "STRING");
        assert_eq!(LiteralKind::of(TokenKind::String), Some(LiteralKind::String));
        assert_eq!(LiteralKind::of(TokenKind::Identifier), None);
    }

    #[test]
    fn test_factor_labels() {
        assert_eq!(
            Factor::Identifier(token(TokenKind::Identifier, "age")).label(),
            "Factor(IDENTIFIER:age)"
        );
        assert_eq!(
            Factor::Number(token(TokenKind::Number, "1.5")).label(),
            "Factor(NUMBER:1.5)"
        );
        assert_eq!(
            Factor::String(token(TokenKind::String, "x")).label(),
            "Factor(STRING:x)"
        );
    }

    #[test]
    fn test_single_factor() {
        let expr = factor_expr(Factor::Number(token(TokenKind::Number, "7")));
        let literal = expr.as_single_factor().and_then(Factor::as_literal);
        assert_eq!(literal.map(|l| l.kind), Some(LiteralKind::Number));

        let mut sum = factor_expr(Factor::Number(token(TokenKind::Number, "7")));
        sum.push(
            token(TokenKind::Plus, "+"),
            Chain::new(Factor::Number(token(TokenKind::Number, "1"))),
        );
        assert!(sum.as_single_factor().is_none());
        assert!(matches!(sum.first_factor(), Factor::Number(_)));
    }

    #[test]
    fn test_for_each_factor_descends_into_parens() {
        let inner = factor_expr(Factor::Identifier(token(TokenKind::Identifier, "b")));
        let mut expr = factor_expr(Factor::Identifier(token(TokenKind::Identifier, "a")));
        expr.push(
            token(TokenKind::Plus, "+"),
            Chain::new(Factor::Paren {
                lparen: token(TokenKind::LeftParen, "("),
                expr: Box::new(inner),
                rparen: token(TokenKind::RightParen, ")"),
            }),
        );

        let mut names = Vec::new();
        expr.for_each_factor(&mut |factor| {
            if let Some(ident) = factor.as_identifier() {
                names.push(ident.lexeme.clone());
            }
        });
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_value_label() {
        let value = Value {
            kind: LiteralKind::String,
            token: token(TokenKind::String, "it's"),
        };
        assert_eq!(value.label(), "Value(STRING_LITERAL:it's)");
        assert_eq!(value.type_hint(), Some(TypeHint::String));
    }
}
