use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid service type: {value} {location}")]
    InvalidServiceType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid cargo type: {value} {location}")]
    InvalidCargoType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid inquiry type: {value} {location}")]
    InvalidInquiryType {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
