use std::ops::Range;

use super::{
    error::InlineError,
    extract::{extract_images, extract_links, find_images, find_links},
    types::{TextKind, TextNode},
};

/// Splits every `Text` node on `delimiter`, classifying the enclosed parts as `kind`.
///
/// Parts alternate outside/inside starting outside, so an even number of parts
/// means an unclosed delimiter. Empty parts are dropped. Non-`Text` nodes pass
/// through unchanged.
///
/// # Errors
/// [`InlineError::MalformedDelimiter`] when any text node contains an odd
/// number of `delimiter` occurrences, [`InlineError::EmptyDelimiter`] when
/// `delimiter` is empty.
pub fn split_by_delimiter(
    nodes: Vec<TextNode>,
    delimiter: &str,
    kind: TextKind,
) -> Result<Vec<TextNode>, InlineError> {
    if delimiter.is_empty() {
        return Err(InlineError::EmptyDelimiter);
    }

    let mut out = Vec::with_capacity(nodes.len());

    for node in nodes {
        if node.kind != TextKind::Text {
            out.push(node);
            continue;
        }

        let parts: Vec<&str> = node.text.split(delimiter).collect();
        if parts.len() % 2 == 0 {
            log::debug!(
                "unbalanced `{delimiter}` ({} occurrences) in {:?}",
                parts.len() - 1,
                node.text
            );
            return Err(InlineError::MalformedDelimiter {
                delimiter: delimiter.to_string(),
            });
        }

        for (i, part) in parts.into_iter().enumerate() {
            if part.is_empty() {
                continue;
            }
            let part_kind = if i % 2 == 0 { TextKind::Text } else { kind };
            out.push(TextNode::new(part, part_kind));
        }
    }

    Ok(out)
}

/// Splits every `Text` node around complete syntax units.
///
/// `find_units` locates the byte ranges of each unit, `extract` turns a single
/// unit into its `(label, url)` pair. A unit that does not extract to exactly
/// one pair is kept as plain text. Empty runs are dropped.
pub fn split_by_pattern<F, E>(
    nodes: Vec<TextNode>,
    find_units: F,
    kind: TextKind,
    extract: E,
) -> Vec<TextNode>
where
    F: Fn(&str) -> Vec<Range<usize>>,
    E: Fn(&str) -> Vec<(String, String)>,
{
    let mut out = Vec::with_capacity(nodes.len());

    // Helper to emit a plain run if it has content
    fn push_text(out: &mut Vec<TextNode>, run: &str) {
        if !run.is_empty() {
            out.push(TextNode::text(run));
        }
    }

    for node in nodes {
        if node.kind != TextKind::Text {
            out.push(node);
            continue;
        }

        let text = node.text.as_str();
        let mut cursor = 0;

        for unit in find_units(text) {
            push_text(&mut out, &text[cursor..unit.start]);
            let run = &text[unit.clone()];
            match extract(run).as_slice() {
                [(label, url)] => out.push(TextNode::with_url(label.as_str(), kind, url.as_str())),
                _ => push_text(&mut out, run),
            }
            cursor = unit.end;
        }

        push_text(&mut out, &text[cursor..]);
    }

    out
}

/// Splits `![alt](url)` units out of text nodes as `Image` nodes.
pub fn split_images(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_by_pattern(nodes, find_images, TextKind::Image, extract_images)
}

/// Splits `[text](url)` units out of text nodes as `Link` nodes.
pub fn split_links(nodes: Vec<TextNode>) -> Vec<TextNode> {
    split_by_pattern(nodes, find_links, TextKind::Link, extract_links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn text(s: &str) -> TextNode {
        TextNode::text(s)
    }

    fn bold(s: &str) -> TextNode {
        TextNode::new(s, TextKind::Bold)
    }

    fn image(s: &str, url: &str) -> TextNode {
        TextNode::with_url(s, TextKind::Image, url)
    }

    fn link(s: &str, url: &str) -> TextNode {
        TextNode::with_url(s, TextKind::Link, url)
    }

    #[test]
    fn no_delimiter_in_text() {
        let node = text("Just plain text");
        let out = split_by_delimiter(vec![node.clone()], "**", TextKind::Bold).unwrap();
        assert_eq!(vec![node], out);
    }

    #[test]
    fn non_text_node_unchanged() {
        let node = bold("Already **bold**");
        let out = split_by_delimiter(vec![node.clone()], "**", TextKind::Bold).unwrap();
        assert_eq!(vec![node], out);
    }

    #[test]
    fn multiple_nodes_mixed_kinds() {
        let nodes = vec![
            text("Start **bold** "),
            bold("middle"),
            text(" and **end**"),
        ];
        let out = split_by_delimiter(nodes, "**", TextKind::Bold).unwrap();
        assert_eq!(
            vec![
                text("Start "),
                bold("bold"),
                text(" "),
                bold("middle"),
                text(" and "),
                bold("end"),
            ],
            out
        );
    }

    #[rstest]
    #[case("This **never closes", "**")]
    #[case("_one_ _two", "_")]
    #[case("`", "`")]
    fn unmatched_delimiter_errors(#[case] input: &str, #[case] delimiter: &str) {
        let err = split_by_delimiter(vec![text(input)], delimiter, TextKind::Bold).unwrap_err();
        assert_eq!(
            InlineError::MalformedDelimiter {
                delimiter: delimiter.to_string()
            },
            err
        );
    }

    #[test]
    fn empty_delimiter_errors() {
        let err = split_by_delimiter(vec![text("abc")], "", TextKind::Bold).unwrap_err();
        assert_eq!(InlineError::EmptyDelimiter, err);
    }

    #[test]
    fn empty_segment_between_delimiters() {
        let out = split_by_delimiter(vec![text("This is **** odd")], "**", TextKind::Bold).unwrap();
        assert_eq!(vec![text("This is "), text(" odd")], out);
    }

    #[test]
    fn delimiter_at_edges() {
        let out = split_by_delimiter(
            vec![text("**bold at start** and **end**")],
            "**",
            TextKind::Bold,
        )
        .unwrap();
        assert_eq!(vec![bold("bold at start"), text(" and "), bold("end")], out);
    }

    #[test]
    fn split_images_two() {
        let node = text(
            "This is text with an ![image](https://i.imgur.com/zjjcJKZ.png) and another ![second image](https://i.imgur.com/3elNhQu.png)",
        );
        assert_eq!(
            vec![
                text("This is text with an "),
                image("image", "https://i.imgur.com/zjjcJKZ.png"),
                text(" and another "),
                image("second image", "https://i.imgur.com/3elNhQu.png"),
            ],
            split_images(vec![node])
        );
    }

    #[test]
    fn split_links_two() {
        let node = text(
            "This is text with an [link](https://google.com) and another [second link](https://youtube.com)",
        );
        assert_eq!(
            vec![
                text("This is text with an "),
                link("link", "https://google.com"),
                text(" and another "),
                link("second link", "https://youtube.com"),
            ],
            split_links(vec![node])
        );
    }

    #[rstest]
    #[case("Just some plain text.")]
    #[case("")]
    #[case("[not closed](")]
    fn no_units_is_identity(#[case] input: &str) {
        let nodes = if input.is_empty() { vec![] } else { vec![text(input)] };
        assert_eq!(nodes.clone(), split_images(nodes.clone()));
        assert_eq!(nodes.clone(), split_links(nodes));
    }

    #[test]
    fn non_text_nodes_untouched() {
        let img = image("![img](url)", "url");
        let lnk = link("[link](url)", "url");
        assert_eq!(vec![img.clone()], split_images(vec![img]));
        assert_eq!(vec![lnk.clone()], split_links(vec![lnk]));
    }

    #[rstest]
    #[case("![alt](https://example.com/img.png)", vec![image("alt", "https://example.com/img.png")])]
    #[case("Look at this ![alt](https://example.com/img.png)", vec![text("Look at this "), image("alt", "https://example.com/img.png")])]
    #[case("![alt](https://example.com/img.png) is nice", vec![image("alt", "https://example.com/img.png"), text(" is nice")])]
    #[case("![](https://ex.com/img.png)", vec![image("", "https://ex.com/img.png")])]
    #[case("  ![alt](https://ex.com/img.png)  ", vec![text("  "), image("alt", "https://ex.com/img.png"), text("  ")])]
    fn split_images_positions(#[case] input: &str, #[case] expected: Vec<TextNode>) {
        assert_eq!(expected, split_images(vec![text(input)]));
    }

    #[rstest]
    #[case("[alt](https://example.com)", vec![link("alt", "https://example.com")])]
    #[case("Click [here](https://example.com)", vec![text("Click "), link("here", "https://example.com")])]
    #[case("[here](https://example.com) is the site", vec![link("here", "https://example.com"), text(" is the site")])]
    #[case("[](https://ex.com)", vec![link("", "https://ex.com")])]
    #[case("  [alt](https://ex.com)  ", vec![text("  "), link("alt", "https://ex.com"), text("  ")])]
    fn split_links_positions(#[case] input: &str, #[case] expected: Vec<TextNode>) {
        assert_eq!(expected, split_links(vec![text(input)]));
    }

    #[test]
    fn links_pass_leaves_image_syntax_alone() {
        let node = text("An image: ![alt](https://ex.com/img.png)");
        assert_eq!(vec![node.clone()], split_links(vec![node]));
    }

    #[test]
    fn images_then_links() {
        let node = text("![logo](https://ex.com/logo.png) visit [site](https://ex.com)");
        let nodes = split_links(split_images(vec![node]));
        assert_eq!(
            vec![
                image("logo", "https://ex.com/logo.png"),
                text(" visit "),
                link("site", "https://ex.com"),
            ],
            nodes
        );
    }

    #[test]
    fn pass_order_does_not_change_partition() {
        let input = "![logo](l.png) visit [site](s) and ![x](y)";
        let a = split_links(split_images(vec![text(input)]));
        let b = split_images(split_links(vec![text(input)]));
        assert_eq!(a, b);
    }

    #[test]
    fn split_images_multiple_input_nodes() {
        let nodes = vec![
            text("Before ![a](https://ex.com/a.png)"),
            text("Middle"),
            text("![b](https://ex.com/b.png) after"),
        ];
        assert_eq!(
            vec![
                text("Before "),
                image("a", "https://ex.com/a.png"),
                text("Middle"),
                image("b", "https://ex.com/b.png"),
                text(" after"),
            ],
            split_images(nodes)
        );
    }

    #[test]
    fn unit_failing_extraction_stays_text() {
        let out = split_by_pattern(
            vec![text("a [b](c) d")],
            find_links,
            TextKind::Link,
            |_| Vec::new(),
        );
        assert_eq!(vec![text("a "), text("[b](c)"), text(" d")], out);
    }
}
