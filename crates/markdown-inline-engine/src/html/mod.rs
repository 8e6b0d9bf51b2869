//! # HTML Nodes
//!
//! A minimal HTML tree: [`LeafNode`] for childless elements and raw text,
//! [`ParentNode`] for elements with children. Attributes keep insertion order.
//! No escaping is applied anywhere; values are emitted verbatim.

pub mod node;
pub mod render;

pub use node::{Attributes, HtmlNode, LeafNode, ParentNode, RenderError};
pub use render::{render_leaf, serialize, text_to_children};
