use crate::MarkdownError;
use crate::parsing::inline::{TextKind, TextNode, tokenize};

use super::node::{HtmlNode, LeafNode, RenderError};

/// Maps an inline node onto the HTML leaf that displays it.
pub fn render_leaf(node: &TextNode) -> LeafNode {
    let url = node.url.as_deref().unwrap_or_default();
    match node.kind {
        TextKind::Text => LeafNode::raw(node.text.as_str()),
        TextKind::Bold => LeafNode::new("b", node.text.as_str()),
        TextKind::Italic => LeafNode::new("i", node.text.as_str()),
        TextKind::Code => LeafNode::new("code", node.text.as_str()),
        TextKind::Link => LeafNode::new("a", node.text.as_str()).with_attribute("href", url),
        TextKind::Image => LeafNode::new("img", "")
            .with_attribute("src", url)
            .with_attribute("alt", node.text.as_str()),
    }
}

/// Serializes `node` and its descendants to markup.
///
/// # Errors
/// A [`RenderError`] for the first structurally incomplete node found.
pub fn serialize(node: &HtmlNode) -> Result<String, RenderError> {
    node.to_html().inspect_err(|e| log::debug!("render failed: {e}"))
}

/// Tokenizes a span of inline markdown and renders each node as a leaf.
///
/// This is the seam block-level converters use to fill a paragraph, heading
/// or list item.
pub fn text_to_children(text: &str) -> Result<Vec<HtmlNode>, MarkdownError> {
    let nodes = tokenize(text)?;
    Ok(nodes.iter().map(|n| render_leaf(n).into()).collect())
}
