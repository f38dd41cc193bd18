//! Generic walks over [`Node`] trees: box-drawing text and a serializable view.

use std::fmt::{self, Write as _};

use serde::Serialize;

use super::node::Node;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

/// An owned `{name, children}` snapshot of a tree, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeView {
    /// The node label.
    pub name: String,
    /// Child views in source order.
    pub children: Vec<TreeView>,
}

impl TreeView {
    /// Captures a tree.
    #[must_use]
    pub fn of(node: &dyn Node) -> Self {
        Self {
            name: node.label(),
            children: node.children().into_iter().map(Self::of).collect(),
        }
    }

    /// Total number of nodes in the view.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Self::size).sum::<usize>()
    }
}

/// Draws a tree with box-drawing connectors, one node per line.
///
/// `suffix` may append text to a node's label; the annotated rendering uses
/// it to attach resolved types.
#[must_use]
pub fn draw_tree<F>(root: &dyn Node, suffix: F) -> String
where
    F: Fn(&dyn Node) -> Option<String>,
{
    let mut out = String::new();
    write_label(&mut out, root, &suffix);
    let children = root.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        draw_subtree(&mut out, child, "", i + 1 == count, &suffix);
    }
    out
}

fn draw_subtree<F>(out: &mut String, node: &dyn Node, prefix: &str, is_last: bool, suffix: &F)
where
    F: Fn(&dyn Node) -> Option<String>,
{
    out.push_str(prefix);
    out.push_str(if is_last { LAST_BRANCH } else { BRANCH });
    write_label(out, node, suffix);

    let next_prefix = format!("{prefix}{}", if is_last { SPACE } else { PIPE });
    let children = node.children();
    let count = children.len();
    for (i, child) in children.into_iter().enumerate() {
        draw_subtree(out, child, &next_prefix, i + 1 == count, suffix);
    }
}

fn write_label<F>(out: &mut String, node: &dyn Node, suffix: &F)
where
    F: Fn(&dyn Node) -> Option<String>,
{
    out.push_str(&node.label());
    if let Some(extra) = suffix(node) {
        // Writing to a String cannot fail.
        let _ = write!(out, " [{extra}]");
    }
    out.push('\n');
}

/// Plain rendering of a tree without annotations.
pub struct TreeText<'a>(pub &'a dyn Node);

impl fmt::Display for TreeText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&draw_tree(self.0, |_| None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cst::node::Chain;
    use crate::cst::{Factor, Term};
    use crate::lexer::{Position, Token, TokenKind};

    fn number(lexeme: &str) -> Factor {
        Factor::Number(Token::new(TokenKind::Number, lexeme, Position::default()))
    }

    fn product() -> Term {
        let mut term = Chain::new(number("2"));
        term.push(Token::new(TokenKind::Star, "*", Position::default()), number("3"));
        term
    }

    #[test]
    fn test_draw_tree_connectors() {
        let drawn = draw_tree(&product(), |_| None);
        assert_eq!(
            drawn,
            "Term\n├── Factor(NUMBER:2)\n├── MULTIPLY(*)\n└── Factor(NUMBER:3)\n"
        );
    }

    #[test]
    fn test_draw_tree_nested_prefixes() {
        let mut expr = Chain::new(product());
        expr.push(
            Token::new(TokenKind::Plus, "+", Position::default()),
            Chain::new(number("1")),
        );
        let drawn = draw_tree(&expr, |_| None);
        let expected = "\
Expression
├── Term
│   ├── Factor(NUMBER:2)
│   ├── MULTIPLY(*)
│   └── Factor(NUMBER:3)
├── PLUS(+)
└── Term
    └── Factor(NUMBER:1)
";
        assert_eq!(drawn, expected);
    }

    #[test]
    fn test_draw_tree_suffix() {
        let drawn = draw_tree(&product(), |node| {
            node.type_hint().map(|_| String::from("Type: NUMBER"))
        });
        assert!(drawn.contains("Factor(NUMBER:2) [Type: NUMBER]\n"));
        assert!(drawn.contains("MULTIPLY(*)\n"));
    }

    #[test]
    fn test_tree_view() {
        let view = TreeView::of(&product());
        assert_eq!(view.name, "Term");
        assert_eq!(view.children.len(), 3);
        assert_eq!(view.size(), 4);
        assert_eq!(view.children[1].name, "MULTIPLY(*)");
    }

    #[test]
    fn test_tree_text_matches_draw_tree() {
        let term = product();
        assert_eq!(TreeText(&term).to_string(), draw_tree(&term, |_| None));
    }
}
