use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Topic selected on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    General,
    Quote,
    Support,
    Partnership,
    Career,
}

impl InquiryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Quote => "quote",
            Self::Support => "support",
            Self::Partnership => "partnership",
            Self::Career => "career",
        }
    }

    /// Human-readable label used in forms and listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General Inquiry",
            Self::Quote => "Request Quote",
            Self::Support => "Customer Support",
            Self::Partnership => "Partnership",
            Self::Career => "Career Inquiry",
        }
    }
}

impl FromStr for InquiryType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "general" => Ok(Self::General),
            "quote" => Ok(Self::Quote),
            "support" => Ok(Self::Support),
            "partnership" => Ok(Self::Partnership),
            "career" => Ok(Self::Career),
            _ => Err(CoreError::InvalidInquiryType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for InquiryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
