use log::warn;

use crate::config::Config;
use crate::pages::validate_title;
use crate::utils::error::{BoxResult, WikiError};

/// Validate the configuration
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_macros(config)?;
    validate_server(config)?;

    Ok(())
}

/// Macro names must be discoverable by the scanner: one or more letters
fn validate_macros(config: &Config) -> BoxResult<()> {
    for (name, delimiter) in config.macros.iter() {
        if name.is_empty() || !name.chars().all(char::is_alphabetic) {
            return Err(WikiError::Config(format!(
                "Macro name {:?} must consist of letters only", name
            )).into());
        }

        if delimiter.is_empty() {
            return Err(WikiError::Config(format!(
                "Macro '{}' has an empty delimiter", name
            )).into());
        }

        if delimiter.contains('.') {
            warn!("Delimiter {:?} of macro '{}' contains '.', expanded text may expand again", delimiter, name);
        }
    }

    if config.macros.is_empty() {
        warn!("No macros configured, macro expansion is a no-op");
    }

    Ok(())
}

/// Validate the listen address and front page
fn validate_server(config: &Config) -> BoxResult<()> {
    if config.port == 0 {
        return Err(WikiError::Config("Port must not be 0".to_string()).into());
    }

    if config.host.trim().is_empty() {
        return Err(WikiError::Config("Host must not be empty".to_string()).into());
    }

    validate_title(&config.front_page)
        .map_err(|e| WikiError::Config(format!("Invalid front page: {}", e)))?;

    Ok(())
}
