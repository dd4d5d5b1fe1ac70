use std::sync::Arc;

use crate::config::Config;
use crate::layout::LayoutRenderer;
use crate::markdown::MarkdownRenderer;
use crate::pages::PageStore;
use crate::utils::error::WikiResult;

/// Everything the request handlers share
pub struct AppState {
    pub store: PageStore,
    pub renderer: MarkdownRenderer,
    pub layouts: LayoutRenderer,
    pub front_page: String,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(store: PageStore, renderer: MarkdownRenderer, layouts: LayoutRenderer, front_page: impl Into<String>) -> Self {
        AppState {
            store,
            renderer,
            layouts,
            front_page: front_page.into(),
        }
    }

    /// Build the state from the wiki configuration
    pub fn from_config(config: &Config) -> WikiResult<Self> {
        Ok(Self::new(
            PageStore::new(&config.data_dir),
            MarkdownRenderer::new(config),
            LayoutRenderer::new(config.templates_dir.as_deref())?,
            config.front_page.clone(),
        ))
    }
}
