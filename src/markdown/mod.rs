pub mod engine;
pub mod macros;
pub mod renderer;
pub mod toc;
pub mod types;
pub mod utils;

pub use macros::MacroExpander;
pub use renderer::{MarkdownRenderer, RenderedPage};
