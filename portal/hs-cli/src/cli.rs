use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "heritage")]
#[command(about = "Heritage Shipping customer portal CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend URL (overrides api.base_url from config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
