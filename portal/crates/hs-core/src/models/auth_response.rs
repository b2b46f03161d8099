use crate::models::{identity::Identity, stored_credential::TokenPair};

use serde::Deserialize;

/// Body returned by login, register and external-token exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
    pub user: Identity,
}

impl AuthResponse {
    /// Split into the persisted token pair and the identity.
    pub fn into_parts(self) -> (TokenPair, Identity) {
        (
            TokenPair {
                access: self.access,
                refresh: self.refresh,
            },
            self.user,
        )
    }
}
