use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry in a shipment's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingUpdate {
    pub status: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub description: String,
}
