//! Boolean condition types used by WHERE clauses.

use super::expression::Expression;
use super::node::{Chain, Node};
use crate::lexer::Token;

/// `AND`-conditions joined by `OR`.
pub type Condition = Chain<AndCondition>;

/// `NOT`-conditions joined by `AND`.
pub type AndCondition = Chain<NotCondition>;

impl Node for Condition {
    fn label(&self) -> String {
        String::from("Condition")
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.interleaved()
    }
}

impl Node for AndCondition {
    fn label(&self) -> String {
        String::from("AndCondition")
    }

    fn children(&self) -> Vec<&dyn Node> {
        self.interleaved()
    }
}

/// An optionally negated predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotCondition {
    /// The `NOT` keyword, if present.
    pub not: Option<Token>,
    /// The predicate.
    pub predicate: Predicate,
}

impl Node for NotCondition {
    fn label(&self) -> String {
        String::from("NotCondition")
    }

    fn children(&self) -> Vec<&dyn Node> {
        let mut nodes: Vec<&dyn Node> = Vec::with_capacity(2);
        if let Some(not) = &self.not {
            nodes.push(not);
        }
        nodes.push(&self.predicate);
        nodes
    }
}

/// The operand of a [`NotCondition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// A column used as a boolean value (`NOT active`).
    Column(Token),
    /// A comparison between two expressions.
    Comparison(Comparison),
}

impl Node for Predicate {
    fn label(&self) -> String {
        match self {
            Self::Column(token) => format!("BooleanExpr(IDENTIFIER:{})", token.lexeme),
            Self::Comparison(comparison) => comparison.label(),
        }
    }

    fn children(&self) -> Vec<&dyn Node> {
        match self {
            Self::Column(_) => Vec::new(),
            Self::Comparison(comparison) => comparison.children(),
        }
    }
}

/// `left op right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Left operand.
    pub left: Expression,
    /// Comparison operator.
    pub op: ComparisonOp,
    /// Right operand.
    pub right: Expression,
}

impl Node for Comparison {
    fn label(&self) -> String {
        String::from("Comparison")
    }

    fn children(&self) -> Vec<&dyn Node> {
        vec![
            &self.left as &dyn Node,
            &self.op as &dyn Node,
            &self.right as &dyn Node,
        ]
    }
}

/// One of `=`, `!=`, `<`, `<=`, `>`, `>=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonOp(pub Token);

impl Node for ComparisonOp {
    fn label(&self) -> String {
        format!("ComparisonOp({})", self.0.lexeme)
    }

    fn children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }
}
