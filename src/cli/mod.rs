pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;
use std::path::PathBuf;

use crate::config::{self, Config};
use crate::utils::error::BoxResult;
use types::{Cli, Commands};

/// Run the command-line interface
pub async fn run() {
    let cli = Cli::parse();

    // `serve --verbose` is the same as the global --debug
    let verbose = matches!(cli.command, Commands::Serve { verbose: true, .. });
    logging::init_logging(cli.debug || verbose);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    if let Err(e) = dispatch(&cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn dispatch(cli: &Cli) -> BoxResult<()> {
    let config = load_cli_config(cli)?;

    match &cli.command {
        Commands::Serve { host, port, templates, static_dir, .. } => {
            commands::handle_serve_command(
                config,
                host.as_ref(),
                *port,
                templates.as_ref(),
                static_dir.as_ref(),
            ).await
        },
        Commands::Expand { file } => commands::handle_expand_command(&config, file.as_ref()),
        Commands::Toc { file, json } => commands::handle_toc_command(&config, file.as_ref(), *json),
        Commands::Render { title } => commands::handle_render_command(&config, title),
        Commands::List {} => commands::handle_list_command(&config),
    }
}

/// Load the configuration files and apply the global overrides
fn load_cli_config(cli: &Cli) -> BoxResult<Config> {
    let mut config = config::load_config(PathBuf::from("."), cli.config.clone())?;

    if let Some(data) = &cli.data {
        config.data_dir = data.clone();
    }

    Ok(config)
}
