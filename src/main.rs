//! ItemVault server binary
//!
//! Loads `.env`, then configuration from an optional YAML file and the
//! environment, and serves the HTTP API.

#![allow(missing_docs)]

use clap::Parser;
use itemvault::utils::logging::init_logging;
use itemvault::{Config, server};
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line options; each overrides the matching configuration value
#[derive(Debug, Parser)]
#[command(name = "server", version, about = "ItemVault HTTP server")]
struct Cli {
    /// YAML configuration file; environment variables still apply on top
    #[arg(short, long, env = "ITEMVAULT_CONFIG")]
    config: Option<PathBuf>,

    /// Bind address
    #[arg(long)]
    host: Option<String>,

    /// Bind port
    #[arg(short, long)]
    port: Option<u16>,
}

async fn load_config(cli: &Cli) -> itemvault::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::from_env()?,
    };

    if let Some(host) = &cli.host {
        config.app.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.app.server.port = port;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match load_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(config.logging());

    match server::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line bind hints readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
