//! speech-relay - audio upload to speech recognition relay
//!
//! Loads configuration, installs tracing, and serves until shutdown.

#![allow(missing_docs)]

use clap::Parser;
use speech_relay::config::{Config, DEFAULT_CONFIG_PATH};
use speech_relay::server;
use speech_relay::utils::logging::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "speech-relay", version, about)]
struct Cli {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "RELAY_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::builder::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display, not Debug, keeps multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
