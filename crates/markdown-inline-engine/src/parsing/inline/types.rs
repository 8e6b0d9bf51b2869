use std::fmt;

use serde::{Deserialize, Serialize};

use super::kinds::{Bold, CodeSpan, Italic};

/// Classification of an inline span. Closed set; the renderer matches on it
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl TextKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TextKind::Text => "text",
            TextKind::Bold => "bold",
            TextKind::Italic => "italic",
            TextKind::Code => "code",
            TextKind::Link => "link",
            TextKind::Image => "image",
        }
    }
}

impl fmt::Display for TextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One contiguous span of inline content.
///
/// For links and images `text` holds the label (alt text) and `url` the
/// target. `url` is `None` for every other kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextNode {
    pub text: String,
    pub kind: TextKind,
    pub url: Option<String>,
}

impl TextNode {
    pub fn new(text: impl Into<String>, kind: TextKind) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    pub fn with_url(text: impl Into<String>, kind: TextKind, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    /// Shorthand for a plain `Text` node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(text, TextKind::Text)
    }
}

impl fmt::Display for TextNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TextNode({}, {}, {})",
            self.text,
            self.kind,
            self.url.as_deref().unwrap_or("None")
        )
    }
}

/// Delimiter strings used by the bold, italic and code passes.
///
/// The pass order is fixed; only the marker strings can be changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delimiters {
    pub bold: String,
    pub italic: String,
    pub code: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            bold: Bold::DELIMITER.to_string(),
            italic: Italic::DELIMITER.to_string(),
            code: CodeSpan::DELIMITER.to_string(),
        }
    }
}
