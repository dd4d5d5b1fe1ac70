use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser, Debug)]
#[command(name = "macrowiki")]
#[command(about = "A small wiki with inline style macros and generated tables of contents", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file, may be repeated (defaults to wiki.yml, wiki.yaml, wiki.toml)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<Vec<PathBuf>>,

    /// Page storage directory (defaults to ./data)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data: Option<PathBuf>,

    /// Show the full backtrace when an error occurs
    #[arg(short, long, default_value_t = false, global = true)]
    pub trace: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false, global = true)]
    pub debug: bool,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the wiki over HTTP
    #[command(alias = "s")]
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, value_name = "HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short = 'P', long, value_name = "PORT")]
        port: Option<u16>,

        /// Directory with view.html, edit.html and index.html overrides
        #[arg(long, value_name = "DIR")]
        templates: Option<PathBuf>,

        /// Directory served under /static
        #[arg(long = "static", value_name = "DIR")]
        static_dir: Option<PathBuf>,

        /// Print verbose output
        #[arg(short = 'V', long, default_value_t = false)]
        verbose: bool,
    },

    /// Print text with its style macros expanded
    Expand {
        /// Input file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Print the table of contents of a document
    Toc {
        /// Input file (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Print the outline tree as JSON instead of markup
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Print the HTML of a stored page
    Render {
        /// Page title
        #[arg(value_name = "TITLE")]
        title: String,
    },

    /// List every stored page
    #[command(alias = "ls")]
    List {},
}
