use serde::{Deserialize, Serialize};

/// Headline figures shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyStats {
    pub years_of_excellence: u32,
    pub global_destinations: u32,
    pub shipments_delivered: u64,
    /// Percentage, e.g. 99.8
    pub on_time_delivery: f64,
}
