mod serve;
mod expand;
mod toc;
mod render;
mod list;

pub use serve::handle_serve_command;
pub use expand::handle_expand_command;
pub use toc::handle_toc_command;
pub use render::handle_render_command;
pub use list::handle_list_command;

use std::io::{self, Read};
use std::path::PathBuf;
use log::debug;

use crate::utils::fs;

/// Read a command's input from a file, or from stdin when none is given
pub(crate) fn read_input(file: Option<&PathBuf>) -> io::Result<String> {
    match file {
        Some(path) => {
            debug!("Reading {}", path.display());
            fs::read_file(path)
        }
        None => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}
