use std::fmt::Write;

use crate::markdown::toc::{OutlineNode, TocMarkup};

/// Render an outline. The root itself is not rendered: its children are
/// wrapped in a single list. An outline without headings renders to nothing.
pub fn render_toc(root: &OutlineNode, settings: &TocMarkup) -> String {
    let mut out = String::new();
    if !root.children.is_empty() {
        render_children(&mut out, &root.children, settings);
    }
    out
}

/// Render a list of sibling headings
fn render_children(out: &mut String, nodes: &[OutlineNode], settings: &TocMarkup) {
    out.push_str(&settings.list_open);
    for node in nodes {
        render_node(out, node, settings);
    }
    out.push_str(&settings.list_close);
}

/// Render one heading with its link and nested headings
fn render_node(out: &mut String, node: &OutlineNode, settings: &TocMarkup) {
    out.push_str(&settings.item_open);
    let _ = writeln!(
        out,
        "<a href=\"#{}\">{}</a>",
        html_escape::encode_double_quoted_attribute(&node.anchor_id),
        html_escape::encode_text(&node.title)
    );

    if !node.children.is_empty() {
        render_children(out, &node.children, settings);
    }

    out.push_str(&settings.item_close);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::toc::{build_tree, extract_headings, HeadingEntry};
    use crate::markdown::utils::heading_anchor;

    fn generate_toc(markup: &str, settings: &TocMarkup) -> String {
        render_toc(&build_tree(&extract_headings(markup, heading_anchor)), settings)
    }

    fn compact() -> TocMarkup {
        TocMarkup {
            item_open: "<li>".to_string(),
            item_close: "</li>".to_string(),
            list_open: "<ul>".to_string(),
            list_close: "</ul>".to_string(),
        }
    }

    /// Deepest list nesting in rendered markup
    fn max_nesting(html: &str, open: &str, close: &str) -> usize {
        let mut depth = 0usize;
        let mut max = 0;
        let mut rest = html;
        while !rest.is_empty() {
            if rest.starts_with(open) {
                depth += 1;
                max = max.max(depth);
                rest = &rest[open.len()..];
            } else if rest.starts_with(close) {
                depth -= 1;
                rest = &rest[close.len()..];
            } else {
                let skip = rest.chars().next().map_or(1, char::len_utf8);
                rest = &rest[skip..];
            }
        }
        max
    }

    #[test]
    fn test_default_markup() {
        let toc = generate_toc("# Intro\n## Details", &TocMarkup::default());
        assert_eq!(
            toc,
            "<ol>\n<li>\n<a href=\"#intro\">Intro</a>\n<ol>\n<li>\n<a href=\"#details\">Details</a>\n</li>\n</ol>\n</li>\n</ol>\n"
        );
    }

    #[test]
    fn test_toc_generation() {
        let markdown = "# Top Heading\n\nText here.\n\n## Sub Heading\n\nMore text.\n\n## Another Sub\n\n### Deep Heading";
        let toc = generate_toc(markdown, &compact());

        assert_eq!(
            toc,
            "<ul><li><a href=\"#top-heading\">Top Heading</a>\n<ul>\
             <li><a href=\"#sub-heading\">Sub Heading</a>\n</li>\
             <li><a href=\"#another-sub\">Another Sub</a>\n<ul>\
             <li><a href=\"#deep-heading\">Deep Heading</a>\n</li></ul></li>\
             </ul></li></ul>"
        );
    }

    #[test]
    fn test_nesting_matches_tree_depth() {
        let markdown = "# A\n### B\n#### C\n# D\n## E";
        let headings = extract_headings(markdown, heading_anchor);
        let tree = build_tree(&headings);
        let toc = render_toc(&tree, &compact());

        assert_eq!(max_nesting(&toc, "<ul>", "</ul>"), tree.depth());
        for heading in &headings {
            let link = format!("href=\"#{}\"", heading.anchor_id);
            assert_eq!(toc.matches(&link).count(), 1, "{}", link);
        }
    }

    #[test]
    fn test_duplicate_headings_link_once_each() {
        let toc = generate_toc("# Notes\n## Notes\n# Notes", &TocMarkup::unordered());
        assert_eq!(toc.matches("href=\"#notes\"").count(), 1);
        assert_eq!(toc.matches("href=\"#notes-1\"").count(), 1);
        assert_eq!(toc.matches("href=\"#notes-2\"").count(), 1);
        assert!(toc.starts_with("<ul>\n"));
    }

    #[test]
    fn test_titles_are_escaped() {
        let root = build_tree(&[HeadingEntry::new(1, "<b>bold</b> & co", "x\"y")]);
        let toc = render_toc(&root, &compact());
        assert!(toc.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
        assert!(toc.contains("href=\"#x&quot;y\""));
    }

    #[test]
    fn test_empty_outline_renders_nothing() {
        assert_eq!(generate_toc("no headings at all", &TocMarkup::default()), "");
    }

    #[test]
    fn test_render_node_without_children() {
        let mut out = String::new();
        render_node(&mut out, &OutlineNode::new(2, "id".into(), "Title".into()), &compact());
        assert_eq!(out, "<li><a href=\"#id\">Title</a>\n</li>");
    }
}
