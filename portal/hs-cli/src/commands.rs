use crate::quote_commands::QuoteCommands;

use clap::{Args, Subcommand};
use hs_session::DemoAccount;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sign in with email and password, or as a demo account
    Login {
        #[arg(long, required_unless_present = "demo")]
        email: Option<String>,
        #[arg(long, required_unless_present = "demo")]
        password: Option<String>,
        /// Demo account to use instead of credentials (admin or customer)
        #[arg(long, conflicts_with_all = ["email", "password"])]
        demo: Option<DemoAccount>,
    },

    /// Create an account and sign in
    Register(RegisterArgs),

    /// Sign in with a Google identity token
    GoogleLogin {
        #[arg(long)]
        token: String,
    },

    /// Sign out and forget stored credentials
    Logout,

    /// Show the signed-in profile
    Whoami,

    /// Quote operations
    Quote {
        #[command(subcommand)]
        action: QuoteCommands,
    },

    /// Track a shipment by tracking number
    Track {
        tracking_number: String,
    },

    /// List shipments of the signed-in user
    Shipments,

    /// Send a message through the contact form
    Contact(ContactArgs),

    /// Show company statistics
    Stats,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub company: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub password_confirm: String,
}

#[derive(Args, Debug)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub company: String,
    /// general, quote, support, partnership or career
    #[arg(long, default_value = "general")]
    pub inquiry_type: String,
    #[arg(long)]
    pub subject: String,
    #[arg(long)]
    pub message: String,
}
