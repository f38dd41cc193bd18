//! Type-annotated rendering of the syntax tree.

use super::schema::Schema;
use crate::cst::{draw_tree, Node, TypeHint};

/// Draws the tree with ` [Type: T]` after every node whose type is known.
///
/// Column references take the type of the first table declaring a column of
/// that name; references to unknown columns stay bare.
#[must_use]
pub fn annotated_tree(root: &dyn Node, schema: &Schema) -> String {
    let mut out = String::from("\n=== Annotated Parse Tree ===\n");
    out.push_str(&draw_tree(root, |node| type_label(node, schema)));
    out
}

fn type_label(node: &dyn Node, schema: &Schema) -> Option<String> {
    let ty = match node.type_hint()? {
        TypeHint::Column(name) => schema.find_column(name)?.as_str().to_string(),
        TypeHint::Number => String::from("NUMBER"),
        TypeHint::String => String::from("STRING"),
        TypeHint::Declared(word) => word.to_string(),
    };
    Some(format!("Type: {ty}"))
}
