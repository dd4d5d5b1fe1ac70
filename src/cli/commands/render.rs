use crate::config::Config;
use crate::markdown::MarkdownRenderer;
use crate::pages::PageStore;
use crate::utils::error::BoxResult;

/// Handle the render command
pub fn handle_render_command(config: &Config, title: &str) -> BoxResult<()> {
    let store = PageStore::new(&config.data_dir);
    let page = store.load(title)?;
    print!("{}", MarkdownRenderer::new(config).render_html(&page.body));
    Ok(())
}
