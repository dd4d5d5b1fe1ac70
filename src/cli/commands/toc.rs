use std::path::PathBuf;

use crate::cli::commands::read_input;
use crate::config::Config;
use crate::markdown::toc::render_toc;
use crate::markdown::MarkdownRenderer;
use crate::utils::error::{BoxResult, WikiError};

/// Handle the toc command
pub fn handle_toc_command(config: &Config, file: Option<&PathBuf>, json: bool) -> BoxResult<()> {
    let input = read_input(file)?;
    let output = toc_output(config, &input, json)?;
    if json {
        println!("{}", output);
    } else {
        print!("{}", output);
    }
    Ok(())
}

fn toc_output(config: &Config, input: &str, json: bool) -> BoxResult<String> {
    let tree = MarkdownRenderer::new(config).outline(input);

    if json {
        serde_json::to_string_pretty(&tree)
            .map_err(|e| WikiError::Generic(format!("Failed to serialize outline: {}", e)).into())
    } else {
        Ok(render_toc(&tree, &config.toc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_output() {
        let toc = toc_output(&Config::default(), "# One\n## Two\n", false).unwrap();
        assert!(toc.starts_with("<ol>\n<li>\n<a href=\"#one\">One</a>"));
    }

    #[test]
    fn test_json_output() {
        let json = toc_output(&Config::default(), "# One\n## Two\n# Three\n", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let top = value["children"].as_array().unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0]["title"], "One");
        assert_eq!(top[0]["children"][0]["anchor_id"], "two");
        assert_eq!(top[1]["level"], 1);
    }

    #[test]
    fn test_macro_annotations_left_out_of_anchors() {
        let json = toc_output(&Config::default(), "# Intro .b
", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["children"][0]["anchor_id"], "intro");
        assert_eq!(value["children"][0]["title"], "Intro");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(toc_output(&Config::default(), "plain text", false).unwrap(), "");
    }
}
