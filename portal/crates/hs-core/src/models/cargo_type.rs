use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Kind of cargo being shipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CargoType {
    Container,
    Bulk,
    Breakbulk,
    Roro,
    Liquid,
    Hazardous,
}

impl CargoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Bulk => "bulk",
            Self::Breakbulk => "breakbulk",
            Self::Roro => "roro",
            Self::Liquid => "liquid",
            Self::Hazardous => "hazardous",
        }
    }

    /// Human-readable label used in forms and listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Container => "Container",
            Self::Bulk => "Bulk Cargo",
            Self::Breakbulk => "Break Bulk",
            Self::Roro => "Roll-on/Roll-off",
            Self::Liquid => "Liquid Cargo",
            Self::Hazardous => "Hazardous Materials",
        }
    }
}

impl FromStr for CargoType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "container" => Ok(Self::Container),
            "bulk" => Ok(Self::Bulk),
            "breakbulk" => Ok(Self::Breakbulk),
            "roro" => Ok(Self::Roro),
            "liquid" => Ok(Self::Liquid),
            "hazardous" => Ok(Self::Hazardous),
            _ => Err(CoreError::InvalidCargoType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for CargoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
