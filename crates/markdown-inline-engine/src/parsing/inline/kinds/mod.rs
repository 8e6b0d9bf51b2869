//! # Inline Kinds
//!
//! Marker types that own the syntax of each inline construct.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIMITER = "**"`
//! - **`Italic`**: `DELIMITER = "_"`
//! - **`CodeSpan`**: `DELIMITER` is a single backtick
//! - **`Image`**: `PATTERN` for `![alt](url)`
//! - **`Link`**: `PATTERN` for `[text](url)`, never preceded by `!`
//!
//! The splitters and extractors read these constants; they never hardcode
//! `**` or `](`.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::{Image, Link};
