use std::path::{Path, PathBuf};
use log::debug;
use serde_yaml::Value;

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, WikiError};
use crate::utils::fs;

/// Configuration file names to look for
const CONFIG_FILES: [&str; 3] = ["wiki.yml", "wiki.yaml", "wiki.toml"];

/// Load wiki configuration from config files.
///
/// Later files override earlier ones key by key; nested tables such as
/// `macros` or `markdown` are merged rather than replaced.
pub fn load_config<P: AsRef<Path>>(
    base_dir: P,
    config_files: Option<Vec<PathBuf>>
) -> BoxResult<Config> {
    let config_paths = match config_files {
        Some(paths) => paths,
        None => find_default_config_files(&base_dir),
    };

    let mut merged = Value::Mapping(Default::default());

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    } else {
        for path in config_paths {
            debug!("Loading configuration from {}", path.display());
            let value = read_config_file(&path)?;
            merge_values(&mut merged, value);
        }
    }

    let config: Config = serde_yaml::from_value(merged)
        .map_err(|e| WikiError::Config(format!("Invalid configuration: {}", e)))?;

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(base_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| base_dir.as_ref().join(name))
        .filter(|path| path.is_file())
        .collect()
}

/// Parse one configuration file into a generic value
fn read_config_file(config_path: &Path) -> BoxResult<Value> {
    if !config_path.exists() {
        return Err(WikiError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_file(config_path)
        .map_err(|e| WikiError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let ext = config_path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    // Assume YAML if no extension
    let value = match ext.as_str() {
        "yml" | "yaml" | "" => serde_yaml::from_str::<Value>(&content)
            .map_err(|e| WikiError::Config(format!(
                "Failed to parse YAML configuration ({}): {}", config_path.display(), e
            )))?,
        "toml" => toml::from_str::<Value>(&content)
            .map_err(|e| WikiError::Config(format!(
                "Failed to parse TOML configuration ({}): {}", config_path.display(), e
            )))?,
        _ => {
            return Err(WikiError::Config(format!(
                "Unsupported configuration file format: {}", ext
            )).into());
        }
    };

    // An empty YAML document parses as null
    Ok(match value {
        Value::Null => Value::Mapping(Default::default()),
        other => other,
    })
}

/// Merge `overlay` into `base`, recursing into mappings
fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
