use std::net::SocketAddr;
use log::{error, info};
use tokio::signal;

use crate::config::Config;
use crate::server::app::create_app;
use crate::server::config::ServerConfig;
use crate::server::types::AppState;
use crate::utils::error::{BoxResult, WikiError};
use crate::utils::fs;

/// Serve the wiki until the server stops or Ctrl+C is pressed
pub async fn serve(server_config: &ServerConfig, config: &Config) -> BoxResult<()> {
    let state = AppState::from_config(config)?;

    if !config.data_dir.exists() {
        info!("Creating data directory {}", config.data_dir.display());
        fs::create_directory(&config.data_dir)?;
    }

    let address = server_config.address_string();
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| WikiError::Server(format!("Invalid listen address {}: {}", address, e)))?;

    info!("Serving pages from {}", config.data_dir.display());
    info!("Serving static files from {}", config.static_dir.display());

    let app = create_app(state, &config.static_dir);
    let server = axum_server::bind(addr).serve(app.into_make_service());

    print_server_banner(server_config, config);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                error!("Server error: {}", e);
                return Err(WikiError::Server(e.to_string()).into());
            }
            info!("Server stopped");
        },
        _ = signal::ctrl_c() => {
            info!("Shutting down server (received Ctrl+C)...");
        },
    }

    Ok(())
}

/// Print a banner with server information
fn print_server_banner(server_config: &ServerConfig, config: &Config) {
    println!("\n{}", "-".repeat(60));
    println!(" macrowiki");
    println!(" - URL: {}", server_config.url());
    println!(" - Front page: {}", config.front_page);
    println!(" - Macros: {}", config.macros.iter().map(|(name, _)| name).collect::<Vec<_>>().join(", "));
    println!(" - Press Ctrl+C to stop");
    println!("{}\n", "-".repeat(60));
}
