use std::path::Path;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::pages::validate_title;
use crate::utils::error::WikiResult;

/// Collect the titles of all page files below `root`, recursively.
///
/// A title is the file path relative to `root` without its extension, with
/// components joined by `/`. Files whose path cannot be a title are skipped.
pub fn collect_titles(root: &Path, extension: &str) -> WikiResult<Vec<String>> {
    if !root.is_dir() {
        debug!("Page directory {} does not exist yet", root.display());
        return Ok(Vec::new());
    }

    let mut titles = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry below {}: {}", root.display(), e);
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
        let title = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if validate_title(&title).is_ok() {
            titles.push(title);
        } else {
            debug!("Ignoring {}: not a valid page title", path.display());
        }
    }

    titles.sort();
    Ok(titles)
}
