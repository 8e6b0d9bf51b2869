use super::{
    error::InlineError,
    split::{split_by_delimiter, split_images, split_links},
    types::{Delimiters, TextKind, TextNode},
};

/// Tokenizes a run of inline markdown into a flat sequence of [`TextNode`]s
/// using the default delimiters (`**`, `_`, `` ` ``).
///
/// # Errors
/// [`InlineError::MalformedDelimiter`] if any delimiter is left unclosed.
pub fn tokenize(text: &str) -> Result<Vec<TextNode>, InlineError> {
    tokenize_with(text, &Delimiters::default())
}

/// Tokenizes with a caller-supplied delimiter set.
///
/// # Pass Order
/// Bold, italic, code, images, links. Every pass only splits nodes that are
/// still `Text`, so content claimed by an earlier pass is never re-styled.
pub fn tokenize_with(text: &str, delimiters: &Delimiters) -> Result<Vec<TextNode>, InlineError> {
    let nodes = vec![TextNode::text(text)];

    let nodes = split_by_delimiter(nodes, &delimiters.bold, TextKind::Bold)?;
    log::trace!("bold pass: {} nodes", nodes.len());
    let nodes = split_by_delimiter(nodes, &delimiters.italic, TextKind::Italic)?;
    log::trace!("italic pass: {} nodes", nodes.len());
    let nodes = split_by_delimiter(nodes, &delimiters.code, TextKind::Code)?;
    log::trace!("code pass: {} nodes", nodes.len());
    let nodes = split_images(nodes);
    log::trace!("image pass: {} nodes", nodes.len());
    let nodes = split_links(nodes);
    log::trace!("link pass: {} nodes", nodes.len());

    Ok(nodes)
}
