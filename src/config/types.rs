use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::config::defaults;
use crate::markdown::engine::MarkdownSettings;
use crate::markdown::toc::TocMarkup;
use crate::markdown::types::MacroStyle;

/// Wiki configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the page files
    #[serde(default = "defaults::default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory served under /static/
    #[serde(default = "defaults::default_static_dir")]
    pub static_dir: PathBuf,

    /// Directory whose templates replace the built-in ones
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,

    /// Page the site root redirects to
    #[serde(default = "defaults::default_front_page")]
    pub front_page: String,

    /// Address to bind to
    #[serde(default = "defaults::default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "defaults::default_port")]
    pub port: u16,

    /// Macro names and the delimiters they expand to
    #[serde(default)]
    pub macros: MacroStyle,

    /// Table of contents markup
    #[serde(default)]
    pub toc: TocMarkup,

    /// Markdown engine settings
    #[serde(default)]
    pub markdown: MarkdownSettings,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: defaults::default_data_dir(),
            static_dir: defaults::default_static_dir(),
            templates_dir: None,
            front_page: defaults::default_front_page(),
            host: defaults::default_host(),
            port: defaults::default_port(),
            macros: MacroStyle::default(),
            toc: TocMarkup::default(),
            markdown: MarkdownSettings::default(),
        }
    }
}
