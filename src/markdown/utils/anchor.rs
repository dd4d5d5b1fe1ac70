use regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    // Everything but letters, marks, numbers, connector punctuation, spaces and hyphens
    static ref REJECTED_CHARS: Regex = Regex::new(r"[^\p{L}\p{M}\p{N}\p{Pc} -]").unwrap();
}

/// Turn heading text into a URL fragment id.
///
/// Follows the markdown engine's own heading id rule so that table of
/// contents links land on the rendered headings.
pub fn anchorize(text: &str) -> String {
    let lower = text.to_lowercase();
    REJECTED_CHARS.replace_all(&lower, "").replace(' ', "-")
}

/// Default id generator for table of contents extraction: the title is
/// displayed unchanged and anchorized into the candidate id.
pub fn heading_anchor(_level: usize, title: &str) -> (String, String) {
    (title.to_string(), anchorize(title))
}
