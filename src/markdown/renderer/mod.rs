mod markdown_renderer;
mod sanitize;

pub use markdown_renderer::{MarkdownRenderer, RenderedPage};
pub use sanitize::sanitize_html;
