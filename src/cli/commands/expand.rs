use std::path::PathBuf;

use crate::cli::commands::read_input;
use crate::config::Config;
use crate::markdown::MacroExpander;
use crate::utils::error::BoxResult;

/// Handle the expand command
pub fn handle_expand_command(config: &Config, file: Option<&PathBuf>) -> BoxResult<()> {
    let input = read_input(file)?;
    print!("{}", expand_text(config, &input));
    Ok(())
}

fn expand_text(config: &Config, input: &str) -> String {
    MacroExpander::new(config.macros.clone()).expand(input)
}
