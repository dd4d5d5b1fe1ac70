use std::collections::{HashMap, HashSet};
use log::debug;
use serde::{Serialize, Deserialize};

/// A heading line found in raw markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    pub level: usize,
    pub title: String,
    pub anchor_id: String,
}

impl HeadingEntry {
    pub fn new(level: usize, title: impl Into<String>, anchor_id: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            anchor_id: anchor_id.into(),
        }
    }
}

/// Issues anchor ids unique within one document
#[derive(Debug, Default)]
struct AnchorRegistry {
    seen: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl AnchorRegistry {
    fn unique(&mut self, candidate: String) -> String {
        let mut count = self.seen.get(&candidate).copied().unwrap_or(0);
        let mut id = suffixed(&candidate, count);

        // a literal heading may already own the suffixed form
        while self.issued.contains(&id) {
            count += 1;
            id = suffixed(&candidate, count);
        }

        self.seen.insert(candidate, count + 1);
        self.issued.insert(id.clone());
        id
    }
}

fn suffixed(id: &str, count: usize) -> String {
    if count == 0 {
        id.to_string()
    } else {
        format!("{}-{}", id, count)
    }
}

/// Extract ATX headings from raw markup.
///
/// `id_gen` receives the level and trimmed title of each heading and returns
/// the display title and the candidate anchor id. Repeated ids get a `-N`
/// suffix; the first occurrence is left as is.
pub fn extract_headings<F>(markup: &str, mut id_gen: F) -> Vec<HeadingEntry>
where
    F: FnMut(usize, &str) -> (String, String),
{
    let mut registry = AnchorRegistry::default();
    let mut headings = Vec::new();

    for line in markup.lines() {
        let line = line.trim();
        let level = line.bytes().take_while(|&b| b == b'#').count();
        if level == 0 {
            continue;
        }

        let (title, candidate) = id_gen(level, line[level..].trim());
        let anchor_id = registry.unique(candidate);
        debug!("h{} id={:?}", level, anchor_id);

        headings.push(HeadingEntry { level, title, anchor_id });
    }

    headings
}
