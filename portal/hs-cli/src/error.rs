use std::panic::Location;

use error_location::ErrorLocation;
use hs_api::ApiError;
use hs_config::ConfigError;
use hs_core::CoreError;
use hs_session::{Route, SessionError, StoreError};
use thiserror::Error;

const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection and try again.";
const SHIPMENT_NOT_FOUND_MESSAGE: &str = "Shipment not found. Please check your tracking number.";
const TRACKING_FAILED_MESSAGE: &str = "Failed to track shipment. Please try again.";
const QUOTE_FAILED_MESSAGE: &str = "Failed to submit quote request. Please try again.";
const SIGN_IN_REQUIRED_MESSAGE: &str = "Please sign in to continue.";

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Session store error: {source}")]
    Store {
        #[from]
        source: StoreError,
    },

    #[error("{source}")]
    Session {
        #[from]
        source: SessionError,
    },

    #[error("Sign-in required, redirecting to {route} {location}")]
    SignInRequired {
        route: Route,
        location: ErrorLocation,
    },

    #[error("Tracking lookup failed: {source} {location}")]
    Track {
        #[source]
        source: ApiError,
        location: ErrorLocation,
    },

    #[error("Quote submission failed: {source} {location}")]
    Quote {
        #[source]
        source: ApiError,
        location: ErrorLocation,
    },

    #[error("API error: {source}")]
    Api {
        #[from]
        source: ApiError,
    },

    #[error("Invalid input: {source}")]
    Validation {
        #[from]
        source: CoreError,
    },

    #[error("Invalid input: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to initialize logger: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize output: {source}")]
    Output {
        #[from]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn sign_in_required(route: Route) -> Self {
        Self::SignInRequired {
            route,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn track(source: ApiError) -> Self {
        Self::Track {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn quote(source: ApiError) -> Self {
        Self::Quote {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text printed to stderr. Never carries tokens, passwords or raw
    /// transport detail.
    pub fn user_message(&self) -> String {
        match self {
            Self::Session { source } => source.user_message().to_string(),
            Self::Store { source } => source.recovery_hint().to_string(),
            Self::SignInRequired { .. } => SIGN_IN_REQUIRED_MESSAGE.to_string(),
            Self::Track { source, .. } => {
                if source.is_not_found() {
                    SHIPMENT_NOT_FOUND_MESSAGE
                } else if source.is_transport() {
                    NETWORK_ERROR_MESSAGE
                } else {
                    TRACKING_FAILED_MESSAGE
                }
                .to_string()
            }
            Self::Quote { source, .. } => {
                if source.is_transport() {
                    NETWORK_ERROR_MESSAGE.to_string()
                } else {
                    source
                        .server_message()
                        .unwrap_or(QUOTE_FAILED_MESSAGE)
                        .to_string()
                }
            }
            Self::Api { source } => source.user_message().to_string(),
            Self::Validation { source } => match source {
                CoreError::Validation { message, .. } => message.clone(),
                CoreError::InvalidServiceType { value, .. } => {
                    format!("Unknown service type '{value}'")
                }
                CoreError::InvalidCargoType { value, .. } => format!("Unknown cargo type '{value}'"),
                CoreError::InvalidInquiryType { value, .. } => {
                    format!("Unknown inquiry type '{value}'")
                }
            },
            Self::Config { .. }
            | Self::Input { .. }
            | Self::Logger { .. }
            | Self::Output { .. } => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
