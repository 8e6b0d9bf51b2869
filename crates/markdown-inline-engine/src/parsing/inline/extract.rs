use std::ops::Range;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use super::kinds::{Image, Link};

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| Regex::new(Image::PATTERN).expect("Invalid image regex"))
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX.get_or_init(|| Regex::new(Link::PATTERN).expect("Invalid link regex"))
}

fn image_captures(text: &str) -> Vec<Captures<'_>> {
    image_regex().captures_iter(text).collect()
}

/// Link matches, skipping any candidate that directly follows `!`.
///
/// `regex` has no lookbehind, so rejected candidates restart the search one
/// byte in rather than at their end.
fn link_captures(text: &str) -> Vec<Captures<'_>> {
    let re = link_regex();
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut from = 0;

    while let Some(caps) = re.captures_at(text, from) {
        let Some(whole) = caps.get(0) else { break };
        let start = whole.start();
        if start > 0 && bytes[start - 1] == Link::IMAGE_MARKER {
            // `[` is ASCII so start + 1 is a char boundary
            from = start + 1;
            continue;
        }
        from = whole.end();
        out.push(caps);
    }

    out
}

fn to_pairs(captures: &[Captures<'_>]) -> Vec<(String, String)> {
    captures
        .iter()
        .map(|caps| {
            let group = |i| caps.get(i).map_or("", |m| m.as_str()).to_string();
            (group(1), group(2))
        })
        .collect()
}

fn to_ranges(captures: &[Captures<'_>]) -> Vec<Range<usize>> {
    captures
        .iter()
        .filter_map(|caps| caps.get(0).map(|m| m.range()))
        .collect()
}

/// Extracts `(alt, url)` pairs for every `![alt](url)` in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    to_pairs(&image_captures(text))
}

/// Extracts `(text, url)` pairs for every `[text](url)` in `text` that is not
/// image syntax, left to right.
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    to_pairs(&link_captures(text))
}

/// Byte ranges of every complete image syntax unit in `text`.
pub fn find_images(text: &str) -> Vec<Range<usize>> {
    to_ranges(&image_captures(text))
}

/// Byte ranges of every complete link syntax unit in `text`.
pub fn find_links(text: &str) -> Vec<Range<usize>> {
    to_ranges(&link_captures(text))
}
