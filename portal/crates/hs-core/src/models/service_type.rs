use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Service line a quote is requested for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    OceanFreight,
    AirFreight,
    LandTransport,
    Multimodal,
    Warehousing,
    Customs,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OceanFreight => "ocean_freight",
            Self::AirFreight => "air_freight",
            Self::LandTransport => "land_transport",
            Self::Multimodal => "multimodal",
            Self::Warehousing => "warehousing",
            Self::Customs => "customs",
        }
    }

    /// Human-readable label used in forms and listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::OceanFreight => "Ocean Freight",
            Self::AirFreight => "Air Freight",
            Self::LandTransport => "Land Transport",
            Self::Multimodal => "Multimodal Transport",
            Self::Warehousing => "Warehousing & Distribution",
            Self::Customs => "Customs Clearance",
        }
    }
}

impl FromStr for ServiceType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "ocean_freight" => Ok(Self::OceanFreight),
            "air_freight" => Ok(Self::AirFreight),
            "land_transport" => Ok(Self::LandTransport),
            "multimodal" => Ok(Self::Multimodal),
            "warehousing" => Ok(Self::Warehousing),
            "customs" => Ok(Self::Customs),
            _ => Err(CoreError::InvalidServiceType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
