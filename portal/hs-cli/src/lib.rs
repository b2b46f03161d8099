//! hs-cli library
//!
//! Command definitions and the [`App`] dispatcher behind the `heritage` binary.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub mod logger;
pub(crate) mod quote_commands;


pub use app::App;
pub use cli::Cli;
pub use commands::{Commands, ContactArgs, RegisterArgs};
pub use error::{CliError, Result as CliResult};
pub use quote_commands::{QuoteArgs, QuoteCommands};
