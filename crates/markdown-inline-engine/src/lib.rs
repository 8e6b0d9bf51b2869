pub mod html;
pub mod parsing;

// Re-export key types for easier usage
pub use html::{
    Attributes, HtmlNode, LeafNode, ParentNode, RenderError, render_leaf, serialize,
    text_to_children,
};
pub use parsing::inline::{
    Delimiters, InlineError, TextKind, TextNode, extract_images, extract_links, tokenize,
    tokenize_with,
};

/// Failure while turning a span of inline markdown into HTML nodes.
#[derive(Debug, thiserror::Error)]
pub enum MarkdownError {
    #[error(transparent)]
    Inline(#[from] InlineError),
    #[error(transparent)]
    Render(#[from] RenderError),
}
