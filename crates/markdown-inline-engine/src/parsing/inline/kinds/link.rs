/// Image syntax: `![alt](url)`.
///
/// The alt text may not contain `[` or `]`, the url may not contain `(` or
/// `)`. Both may be empty.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r"!\[([^\[\]]*)\]\(([^()]*)\)";
}

/// Link syntax: `[text](url)`.
///
/// Same character rules as [`Image`]. A match directly preceded by
/// [`Link::IMAGE_MARKER`] is image syntax and is not a link.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[([^\[\]]*)\]\(([^()]*)\)";
    pub const IMAGE_MARKER: u8 = b'!';
}
