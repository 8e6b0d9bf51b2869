//! # Inline Parsing
//!
//! Multi-pass splitting of a run of inline markdown into [`TextNode`]s.
//!
//! ## Architecture
//!
//! The input starts life as a single `Text` node. Each pass walks the current
//! node list and only ever splits `Text` nodes, emitting a new list:
//!
//! 1. bold (`**`)
//! 2. italic (`_`)
//! 3. code (`` ` ``)
//! 4. images (`![alt](url)`)
//! 5. links (`[text](url)`)
//!
//! Anything already classified is passed through untouched, so styling is
//! flat: `**_x_**` yields a single Bold node with text `_x_`.
//!
//! ## Modules
//!
//! - **`types`**: `TextNode`, `TextKind` and the configurable `Delimiters`
//! - **`kinds`**: marker types owning each construct's syntax
//! - **`extract`**: regex extraction of `(label, url)` pairs
//! - **`split`**: the delimiter and syntax-unit splitters
//! - **`parser`**: `tokenize()` main entry point

pub mod error;
pub mod extract;
pub mod kinds;
pub mod parser;
pub mod split;
pub mod types;

pub use error::InlineError;
pub use extract::{extract_images, extract_links};
pub use parser::{tokenize, tokenize_with};
pub use split::{split_by_delimiter, split_by_pattern, split_images, split_links};
pub use types::{Delimiters, TextKind, TextNode};
