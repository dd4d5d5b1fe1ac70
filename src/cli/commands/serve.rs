use std::path::PathBuf;
use log::info;

use crate::config::{validate_config, Config};
use crate::server::{self, ServerConfig};
use crate::utils::error::BoxResult;

/// Handle the serve command
pub async fn handle_serve_command(
    mut config: Config,
    host: Option<&String>,
    port: Option<u16>,
    templates: Option<&PathBuf>,
    static_dir: Option<&PathBuf>,
) -> BoxResult<()> {
    // Command line options take precedence over the configuration files
    if let Some(host) = host {
        config.host = host.clone();
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(templates) = templates {
        config.templates_dir = Some(templates.clone());
    }
    if let Some(static_dir) = static_dir {
        config.static_dir = static_dir.clone();
    }
    validate_config(&config)?;

    let server_config = ServerConfig::from_config(&config);
    info!("Starting server at {}", server_config.url());
    server::serve(&server_config, &config).await
}
