//! The generic view shared by every tree type.

use crate::lexer::Token;

/// What a node contributes to a type-annotated rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeHint<'a> {
    /// A reference to a column, typed by schema lookup.
    Column(&'a str),
    /// A numeric literal.
    Number,
    /// A string literal.
    String,
    /// A declared column type, as written.
    Declared(&'a str),
}

/// A node of the concrete syntax tree, seen generically.
///
/// Every grammar construct implements this so that printers and serializers
/// can walk the full derivation without knowing the concrete types.
pub trait Node {
    /// The grammar role of the node, with its value folded in for leaves
    /// (e.g. `SelectStmt`, `Factor(NUMBER:1)`, `COMMA(,)`).
    fn label(&self) -> String;

    /// The node's children in source order.
    fn children(&self) -> Vec<&dyn Node>;

    /// Typing information for annotated renderings.
    fn type_hint(&self) -> Option<TypeHint<'_>> {
        None
    }
}

impl Node for Token {
    fn label(&self) -> String {
        format!("{}({})", self.kind.name(), self.lexeme)
    }

    fn children(&self) -> Vec<&dyn Node> {
        Vec::new()
    }
}

/// One or more items joined by separator tokens, such as a comma-separated
/// list or a run of operands joined by operators of equal precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain<T> {
    /// The leading item.
    pub first: T,
    /// Each following item with the token that precedes it.
    pub rest: Vec<(Token, T)>,
}

impl<T> Chain<T> {
    /// Creates a chain holding a single item.
    #[must_use]
    pub const fn new(first: T) -> Self {
        Self {
            first,
            rest: Vec::new(),
        }
    }

    /// Appends an item together with its separator.
    pub fn push(&mut self, separator: Token, item: T) {
        self.rest.push((separator, item));
    }

    /// Iterates over the items, skipping the separators.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        core::iter::once(&self.first).chain(self.rest.iter().map(|(_, item)| item))
    }

    /// Iterates over the separator tokens.
    pub fn separators(&self) -> impl Iterator<Item = &Token> {
        self.rest.iter().map(|(separator, _)| separator)
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        1 + self.rest.len()
    }

    /// A chain always holds at least one item.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns the only item when there is exactly one.
    #[must_use]
    pub fn single(&self) -> Option<&T> {
        self.rest.is_empty().then_some(&self.first)
    }
}

impl<T: Node> Chain<T> {
    /// Items and separators interleaved in source order.
    pub(crate) fn interleaved(&self) -> Vec<&dyn Node> {
        let mut nodes: Vec<&dyn Node> = Vec::with_capacity(1 + 2 * self.rest.len());
        nodes.push(&self.first);
        for (separator, item) in &self.rest {
            nodes.push(separator);
            nodes.push(item);
        }
        nodes
    }
}
