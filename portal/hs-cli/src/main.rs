//! heritage - Heritage Shipping portal CLI
//!
//! Signs in against the portal backend and runs customer operations, printing
//! JSON on stdout.
//!
//! # Examples
//!
//! ```bash
//! # Sign in as the demo customer
//! heritage login --demo customer
//!
//! # Track a shipment
//! heritage track HSL123456789 --pretty
//!
//! # Request a quote
//! heritage quote submit --service-type ocean_freight --origin Chattogram \
//!     --destination Colombo --cargo-type container --date 2026-11-01 \
//!     --description "Garments"
//! ```

use hs_api::ApiClient;
use hs_cli::{App, Cli, CliError, CliResult, logger};
use hs_config::Config;
use hs_session::{FileStore, SessionManager};

use std::process::ExitCode;

use clap::Parser;
use log::error;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    // Load and validate configuration
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.api.base_url = server;
    }
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;
    config.log_summary();

    let api = ApiClient::from_config(&config.api)?;
    let store = FileStore::open(config.session_path()?)?;
    let app = App::new(SessionManager::new(api, store));

    let value = app.execute(cli.command).await?;
    print_json(&value, cli.pretty)
}

fn print_json(value: &Value, pretty: bool) -> CliResult<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(CliError::from)?;

    println!("{json}");
    Ok(())
}
