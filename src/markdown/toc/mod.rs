mod generator;
mod parser;
mod tree;

pub use generator::render_toc;
pub use parser::{extract_headings, HeadingEntry};
pub use tree::{build_tree, OutlineNode};

use serde::{Serialize, Deserialize};

/// Markup tokens wrapped around every level and item of a rendered table of contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TocMarkup {
    /// Opens the entry of a single heading
    pub item_open: String,
    /// Closes the entry of a single heading
    pub item_close: String,
    /// Opens a list of sibling headings
    pub list_open: String,
    /// Closes a list of sibling headings
    pub list_close: String,
}

impl Default for TocMarkup {
    fn default() -> Self {
        Self {
            item_open: "<li>\n".to_string(),
            item_close: "</li>\n".to_string(),
            list_open: "<ol>\n".to_string(),
            list_close: "</ol>\n".to_string(),
        }
    }
}

impl TocMarkup {
    /// Unordered-list variant of the default markup
    pub fn unordered() -> Self {
        Self {
            list_open: "<ul>\n".to_string(),
            list_close: "</ul>\n".to_string(),
            ..Self::default()
        }
    }
}
