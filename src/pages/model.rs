use regex::Regex;
use lazy_static::lazy_static;

use crate::utils::error::{WikiError, WikiResult};

lazy_static! {
    // One or more '/'-separated segments without dots or backslashes
    static ref VALID_TITLE: Regex = Regex::new(r"^[^/\\.]+(/[^/\\.]+)*$").unwrap();
}

/// A wiki page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page name, also its path below the data directory
    pub title: String,
    /// Raw markup as written by the user
    pub body: String,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Page {
            title: title.into(),
            body: body.into(),
        }
    }

    /// A page that has not been written yet
    pub fn empty(title: impl Into<String>) -> Self {
        Self::new(title, String::new())
    }
}

/// URL of a page action such as `view`, `edit` or `save`, with every title
/// segment percent-encoded
pub fn page_url(action: &str, title: &str) -> String {
    let encoded: Vec<_> = title.split('/').map(|segment| urlencoding::encode(segment)).collect();
    format!("/{}/{}", action, encoded.join("/"))
}

/// Check that a title can name a page file without escaping the data directory
pub fn validate_title(title: &str) -> WikiResult<()> {
    if VALID_TITLE.is_match(title) {
        Ok(())
    } else {
        Err(WikiError::InvalidTitle(title.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_titles() {
        for title in ["FrontPage", "notes/rust", "a/b/c", "with space", "Ünïcode"] {
            assert!(validate_title(title).is_ok(), "{}", title);
        }
    }

    #[test]
    fn test_page_url() {
        assert_eq!(page_url("view", "FrontPage"), "/view/FrontPage");
        assert_eq!(page_url("edit", "notes/my page"), "/edit/notes/my%20page");
    }

    #[test]
    fn test_invalid_titles() {
        for title in ["", "/abs", "trailing/", "a//b", "../up", "file.txt", "back\\slash", "."] {
            assert!(validate_title(title).is_err(), "{}", title);
        }
    }
}
