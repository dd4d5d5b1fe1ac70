use log::info;

use crate::config::Config;
use crate::pages::PageStore;
use crate::utils::error::BoxResult;

/// Handle the list command
pub fn handle_list_command(config: &Config) -> BoxResult<()> {
    let titles = PageStore::new(&config.data_dir).list_pages()?;
    if titles.is_empty() {
        info!("No pages in {}", config.data_dir.display());
    }
    for title in titles {
        println!("{}", title);
    }
    Ok(())
}
