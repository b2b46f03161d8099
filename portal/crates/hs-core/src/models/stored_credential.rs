use crate::models::identity::Identity;

use serde::{Deserialize, Serialize};

/// Bearer token pair issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    /// Persisted but never used to refresh the access token.
    pub refresh: Option<String>,
}

/// What the session store remembers between runs.
///
/// The two shapes are mutually exclusive on disk; when both are found the
/// demo identity wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredCredential {
    DemoIdentity(Identity),
    TokenPair(TokenPair),
}

impl StoredCredential {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DemoIdentity(_) => "demo",
            Self::TokenPair(_) => "token",
        }
    }
}
