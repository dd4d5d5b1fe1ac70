mod collector;
mod model;
mod store;

pub use collector::collect_titles;
pub use model::{page_url, validate_title, Page};
pub use store::PageStore;
