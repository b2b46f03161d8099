use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteReceipt {
    pub quote_number: String,
    #[serde(default)]
    pub message: Option<String>,
}
