use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

/// Mapping from macro name to the delimiter it wraps text in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacroStyle(BTreeMap<String, String>);

impl MacroStyle {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: impl Into<String>, delimiter: impl Into<String>) {
        self.0.insert(name.into(), delimiter.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Same macro names with empty delimiters: expanding with it only
    /// removes the macro annotations
    pub fn silenced(&self) -> Self {
        Self(self.0.keys().map(|name| (name.clone(), String::new())).collect())
    }
}

impl Default for MacroStyle {
    /// Italic, bold, code and math
    fn default() -> Self {
        Self::from_pairs([("i", "*"), ("b", "**"), ("c", "`"), ("m", "$")])
    }
}
