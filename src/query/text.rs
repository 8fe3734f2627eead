//! Flattening of mixed-content description nodes into plain text.

use roxmltree::{Node, NodeType};

/// Flattens a mixed-content node into a single trimmed string.
///
/// Doxygen interleaves formatting elements (`<para>`, `<emphasis>`,
/// `<ref>`, ...) with character data inside description nodes. This walks
/// the subtree depth-first and concatenates character data in document
/// order: the node's leading text, each child's flattened text, and the
/// tail text following each child. Trimming happens at every level, not
/// just at the top: each element is flattened to a trimmed string before
/// being appended, so padding at the edges of a `<para>` or `<ref>` never
/// leaks into the output, while whitespace in tail text is kept as-is.
///
/// An absent node flattens to the empty string.
pub fn flatten(node: Option<Node<'_, '_>>) -> String {
    node.map(flatten_node).unwrap_or_default()
}

fn flatten_node(node: Node<'_, '_>) -> String {
    // roxmltree surfaces tail text as sibling text nodes, so walking the
    // children in document order yields text, child content, and tails in
    // exactly the order they appear in the file.
    let mut out = String::new();
    for child in node.children() {
        match child.node_type() {
            NodeType::Text => out.push_str(child.text().unwrap_or("")),
            NodeType::Element => out.push_str(&flatten_node(child)),
            _ => {}
        }
    }
    out.trim().to_string()
}
