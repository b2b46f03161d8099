use crate::store::error::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use hs_api::ApiError;
use thiserror::Error;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Registration failed. Please try again.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";
pub const EXTERNAL_LOGIN_FAILED_MESSAGE: &str = "Google login failed";

/// Failures of the session mutations.
///
/// Remote failures keep their [`ApiError`] for logging, but `user_message`
/// never exposes it.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Password confirmation does not match {location}")]
    PasswordMismatch { location: ErrorLocation },

    #[error("Login rejected: {source} {location}")]
    InvalidCredentials {
        #[source]
        source: ApiError,
        location: ErrorLocation,
    },

    #[error("Registration rejected: {source} {location}")]
    RegistrationFailed {
        #[source]
        source: ApiError,
        location: ErrorLocation,
    },

    #[error("External token exchange rejected: {source} {location}")]
    ExternalLoginFailed {
        #[source]
        source: ApiError,
        location: ErrorLocation,
    },

    #[error("Session storage error: {source} {location}")]
    Storage {
        #[source]
        source: StoreError,
        location: ErrorLocation,
    },
}

impl SessionError {
    #[track_caller]
    pub fn password_mismatch() -> Self {
        Self::PasswordMismatch {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials(source: ApiError) -> Self {
        Self::InvalidCredentials {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn registration_failed(source: ApiError) -> Self {
        Self::RegistrationFailed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn external_login_failed(source: ApiError) -> Self {
        Self::ExternalLoginFailed {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the failure was decided without touching the network.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::PasswordMismatch { .. } | Self::Storage { .. })
    }

    /// Generic text safe to show the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::PasswordMismatch { .. } => PASSWORD_MISMATCH_MESSAGE,
            Self::InvalidCredentials { .. } => INVALID_CREDENTIALS_MESSAGE,
            Self::RegistrationFailed { .. } => REGISTRATION_FAILED_MESSAGE,
            Self::ExternalLoginFailed { .. } => EXTERNAL_LOGIN_FAILED_MESSAGE,
            Self::Storage { source, .. } => source.recovery_hint(),
        }
    }
}

impl From<StoreError> for SessionError {
    #[track_caller]
    fn from(source: StoreError) -> Self {
        Self::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
