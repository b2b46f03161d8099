use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum QuoteCommands {
    /// Request a shipping quote
    Submit(QuoteArgs),
    /// Look up a quote by number
    Status {
        quote_number: String,
    },
    /// List quotes submitted by the signed-in user
    List,
}

/// Contact fields left out default to the signed-in profile.
#[derive(Args, Debug)]
pub struct QuoteArgs {
    /// ocean_freight, air_freight, land_transport, multimodal, warehousing or customs
    #[arg(long)]
    pub service_type: String,
    #[arg(long)]
    pub origin: String,
    #[arg(long)]
    pub destination: String,
    /// container, bulk, breakbulk, roro, liquid or hazardous
    #[arg(long)]
    pub cargo_type: String,
    /// Weight in kg
    #[arg(long, default_value = "")]
    pub weight: String,
    #[arg(long, default_value = "")]
    pub dimensions: String,
    /// Declared cargo value in USD
    #[arg(long, default_value = "")]
    pub estimated_value: String,
    /// Preferred shipping date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    #[arg(long, default_value = "")]
    pub special_requirements: String,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub contact_name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
}
