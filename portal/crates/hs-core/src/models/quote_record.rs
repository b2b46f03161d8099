use crate::models::{cargo_type::CargoType, service_type::ServiceType};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A previously submitted quote request and its processing state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub quote_number: String,
    pub service_type: ServiceType,
    pub cargo_type: CargoType,
    pub origin_port: String,
    pub destination_port: String,
    #[serde(default)]
    pub is_processed: bool,
    /// Decimal string, exactly as the backend formats it
    #[serde(default)]
    pub quoted_price: Option<String>,
    pub created_at: DateTime<Utc>,
}
