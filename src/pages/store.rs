use std::io;
use std::path::PathBuf;
use log::{debug, info};

use crate::pages::{collect_titles, validate_title, Page};
use crate::utils::error::{WikiError, WikiResult};
use crate::utils::fs;

/// Extension of page files
pub const PAGE_EXTENSION: &str = "txt";

/// File-backed page storage: one `<title>.txt` file per page
#[derive(Debug, Clone)]
pub struct PageStore {
    root: PathBuf,
}

impl PageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        PageStore { root: root.into() }
    }

    /// Path of the file backing a page
    pub fn page_path(&self, title: &str) -> WikiResult<PathBuf> {
        validate_title(title)?;
        Ok(self.root.join(format!("{}.{}", title, PAGE_EXTENSION)))
    }

    /// Load a page by title
    pub fn load(&self, title: &str) -> WikiResult<Page> {
        let path = self.page_path(title)?;
        debug!("Loading page {} from {}", title, path.display());

        match fs::read_file(&path) {
            Ok(body) => Ok(Page::new(title, body)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(WikiError::PageNotFound(title.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Save a page, creating intermediate directories for nested titles
    pub fn save(&self, page: &Page) -> WikiResult<()> {
        let path = self.page_path(&page.title)?;
        fs::write_file(&path, &page.body)?;
        info!("Saved page {} ({} bytes)", page.title, page.body.len());
        Ok(())
    }

    pub fn exists(&self, title: &str) -> bool {
        self.page_path(title).map(|path| path.is_file()).unwrap_or(false)
    }

    /// Titles of every stored page, sorted
    pub fn list_pages(&self) -> WikiResult<Vec<String>> {
        collect_titles(&self.root, PAGE_EXTENSION)
    }
}
