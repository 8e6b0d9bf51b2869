//! # Parsing
//!
//! Only inline content is handled here. Block structure (headings, lists,
//! quotes) is expected to be split out by the caller, which then hands each
//! inline text span to [`inline::tokenize`].

pub mod inline;
