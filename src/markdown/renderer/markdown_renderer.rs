use log::debug;

use crate::config::Config;
use crate::markdown::engine::{create_comrak_options, render_markdown, MarkdownSettings};
use crate::markdown::macros::{expand, MacroExpander};
use crate::markdown::renderer::sanitize_html;
use crate::markdown::toc::{self, build_tree, extract_headings, OutlineNode, TocMarkup};
use crate::markdown::types::MacroStyle;
use crate::markdown::utils::heading_anchor;

/// Page body rendered for display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPage {
    /// Sanitized page HTML
    pub html: String,
    /// Table of contents markup, empty when the page has no headings
    pub toc: String,
}

/// Markdown renderer with macro expansion, sanitization and table of contents
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    expander: MacroExpander,
    settings: MarkdownSettings,
    toc_markup: TocMarkup,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer from config
    pub fn new(config: &Config) -> Self {
        Self::with_settings(
            config.macros.clone(),
            config.markdown.clone(),
            config.toc.clone(),
        )
    }

    pub fn with_settings(style: MacroStyle, settings: MarkdownSettings, toc_markup: TocMarkup) -> Self {
        MarkdownRenderer {
            expander: MacroExpander::new(style),
            settings,
            toc_markup,
        }
    }

    /// Render a page body to sanitized HTML
    pub fn render_html(&self, body: &str) -> String {
        let html = if self.settings.expand_macros {
            render_markdown(&self.expander.expand(body), &create_comrak_options(&self.settings))
        } else {
            render_markdown(body, &create_comrak_options(&self.settings))
        };

        sanitize_html(&html)
    }

    /// Heading outline of a raw page body.
    ///
    /// With macro expansion on, annotations are dropped from heading titles
    /// before anchorizing, matching the ids of the rendered headings.
    pub fn outline(&self, body: &str) -> OutlineNode {
        let headings = if self.settings.expand_macros {
            let plain = self.expander.style().silenced();
            extract_headings(body, |level, title| heading_anchor(level, &expand(title, &plain)))
        } else {
            extract_headings(body, heading_anchor)
        };

        build_tree(&headings)
    }

    /// Generate the table of contents of a raw page body
    pub fn render_toc(&self, body: &str) -> String {
        toc::render_toc(&self.outline(body), &self.toc_markup)
    }

    /// Render a page body together with its table of contents
    pub fn render(&self, body: &str) -> RenderedPage {
        let page = RenderedPage {
            html: self.render_html(body),
            toc: self.render_toc(body),
        };
        debug!("Rendered {} bytes of markup into {} bytes of HTML", body.len(), page.html.len());
        page
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::with_settings(MacroStyle::default(), MarkdownSettings::default(), TocMarkup::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_rendering() {
        let renderer = MarkdownRenderer::default();

        let markdown = "# Hello, World!\n\nThis is a **bold** statement.";
        let html = renderer.render_html(markdown);

        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_macros_expanded_before_rendering() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render_html("Some bold words .b2 and code .c here");

        assert!(html.contains("<strong>bold words</strong>"));
        assert!(html.contains("<code>code</code>"));
        assert!(!html.contains(".b2"));
    }

    #[test]
    fn test_macro_expansion_can_be_disabled() {
        let settings = MarkdownSettings { expand_macros: false, ..MarkdownSettings::default() };
        let renderer = MarkdownRenderer::with_settings(MacroStyle::default(), settings, TocMarkup::default());
        assert!(renderer.render_html("plain .b").contains("plain .b"));
    }

    #[test]
    fn test_unsafe_html_is_sanitized() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render_html("hello <script>alert('x')</script> <img src=x onerror=alert(1)>");

        assert!(!html.contains("<script"));
        assert!(!html.contains("onerror"));
    }

    #[test]
    fn test_table_of_contents() {
        let renderer = MarkdownRenderer::default();

        let markdown = "# Main Title\n\n## Section 1\n\nContent\n\n## Section 2\n\nMore content";
        let page = renderer.render(markdown);

        assert!(page.toc.starts_with("<ol>"));
        assert!(page.toc.contains("<a href=\"#section-1\">"));
        assert!(page.toc.contains("<a href=\"#section-2\">"));
        assert!(page.html.contains("id=\"section-1\""));
    }

    #[test]
    fn test_toc_links_match_headings_with_macros() {
        let renderer = MarkdownRenderer::default();
        let page = renderer.render("# Title .i

## Some code .c2
");

        assert!(page.html.contains("id=\"title\""));
        assert!(page.toc.contains("<a href=\"#title\">Title</a>"));
        assert!(page.html.contains("id=\"some-code\""));
        assert!(page.toc.contains("<a href=\"#some-code\">Some code</a>"));
        assert!(!page.toc.contains(".i"));
    }

    #[test]
    fn test_toc_keeps_annotations_without_expansion() {
        let settings = MarkdownSettings { expand_macros: false, ..MarkdownSettings::default() };
        let renderer = MarkdownRenderer::with_settings(MacroStyle::default(), settings, TocMarkup::default());
        assert!(renderer.render_toc("# Title .i").contains("<a href=\"#title-i\">Title .i</a>"));
    }

    #[test]
    fn test_page_without_headings_has_empty_toc() {
        let page = MarkdownRenderer::default().render("just a paragraph");
        assert!(page.toc.is_empty());
        assert!(page.html.contains("<p>just a paragraph</p>"));
    }
}
