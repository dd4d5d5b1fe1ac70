use comrak::Options;
use serde::{Serialize, Deserialize};

/// Markdown engine switches exposed through the wiki configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkdownSettings {
    /// Render every newline inside a paragraph as a line break
    pub hard_wraps: bool,
    /// Recognize `$...$` and `$$...$$` math spans
    pub math: bool,
    /// Give headings an id attribute derived from their text
    pub heading_ids: bool,
    /// Run the macro expander before rendering
    pub expand_macros: bool,
}

impl Default for MarkdownSettings {
    fn default() -> Self {
        Self {
            hard_wraps: true,
            math: true,
            heading_ids: true,
            expand_macros: true,
        }
    }
}

/// Create ComrakOptions with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>(settings: &MarkdownSettings) -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.footnotes = true;
    options.extension.math_dollars = settings.math;
    if settings.heading_ids {
        options.extension.header_ids = Some(String::new());
    }

    // Render options
    options.render.hardbreaks = settings.hard_wraps;
    options.render.github_pre_lang = true;
    // raw HTML is passed through and left to the sanitizer
    options.render.unsafe_ = true;

    options
}

/// Render markdown to HTML using Comrak
pub fn render_markdown<'a>(content: &str, options: &Options<'a>) -> String {
    comrak::markdown_to_html(content, options)
}
