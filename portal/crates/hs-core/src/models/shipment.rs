use crate::models::{shipment_status::ShipmentStatus, tracking_update::TrackingUpdate};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Location shown when the timeline is still empty.
pub const DEFAULT_LOCATION: &str = "In Transit";

/// Tracking view of a shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub tracking_number: String,
    pub status: ShipmentStatus,
    pub origin_port: String,
    pub destination_port: String,
    #[serde(default)]
    pub vessel_name: Option<String>,
    pub estimated_delivery: DateTime<Utc>,

    /// Newest first, as sent by the backend
    #[serde(default)]
    pub updates: Vec<TrackingUpdate>,
}

impl Shipment {
    pub fn latest_update(&self) -> Option<&TrackingUpdate> {
        self.updates.first()
    }

    pub fn current_location(&self) -> &str {
        self.latest_update()
            .map(|u| u.location.as_str())
            .filter(|l| !l.is_empty())
            .unwrap_or(DEFAULT_LOCATION)
    }

    pub fn route(&self) -> String {
        format!("{} → {}", self.origin_port, self.destination_port)
    }
}
