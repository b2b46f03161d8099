use crate::store::{KeyValueStore, error::Result as StoreResult};

use hs_core::{Identity, StoredCredential, TokenPair};
use log::{debug, warn};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const DEMO_USER_KEY: &str = "demo_user";

/// Outcome of reading the persisted credential.
///
/// - `credential: Some(..)`: a usable record was found
/// - `credential: None, corruption_error: None`: nothing stored
/// - `credential: None, corruption_error: Some(..)`: a demo record exists but does not parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub credential: Option<StoredCredential>,
    pub corruption_error: Option<String>,
}

/// Typed view over the three session keys of a [`KeyValueStore`].
#[derive(Debug)]
pub struct CredentialStore<S> {
    store: S,
}

impl<S: KeyValueStore> CredentialStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Empty values are treated as absent.
    fn read(&self, key: &str) -> Option<String> {
        self.store.get(key).filter(|v| !v.is_empty())
    }

    /// Read the persisted credential. A demo record shadows any token pair.
    pub fn load(&self) -> LoadResult {
        if let Some(raw) = self.read(DEMO_USER_KEY) {
            return match serde_json::from_str::<Identity>(&raw) {
                Ok(identity) => LoadResult {
                    credential: Some(StoredCredential::DemoIdentity(identity)),
                    corruption_error: None,
                },
                Err(e) => {
                    warn!("Stored demo identity is unreadable: {e}");
                    LoadResult {
                        credential: None,
                        corruption_error: Some(e.to_string()),
                    }
                }
            };
        }

        let credential = self.read(ACCESS_TOKEN_KEY).map(|access| {
            StoredCredential::TokenPair(TokenPair {
                access,
                refresh: self.read(REFRESH_TOKEN_KEY),
            })
        });

        LoadResult {
            credential,
            corruption_error: None,
        }
    }

    /// Persist `credential`, removing the keys of the other kind.
    pub fn save(&mut self, credential: &StoredCredential) -> StoreResult<()> {
        match credential {
            StoredCredential::DemoIdentity(identity) => {
                let json = serde_json::to_string(identity)?;
                self.store.set(DEMO_USER_KEY, &json)?;
                self.discard_tokens()?;
            }
            StoredCredential::TokenPair(pair) => {
                self.store.set(ACCESS_TOKEN_KEY, &pair.access)?;
                match pair.refresh.as_deref() {
                    Some(refresh) if !refresh.is_empty() => {
                        self.store.set(REFRESH_TOKEN_KEY, refresh)?
                    }
                    _ => self.store.remove(REFRESH_TOKEN_KEY)?,
                }
                self.discard_demo()?;
            }
        }

        debug!("Saved {} credential", credential.kind());
        Ok(())
    }

    pub fn discard_tokens(&mut self) -> StoreResult<()> {
        self.store.remove(ACCESS_TOKEN_KEY)?;
        self.store.remove(REFRESH_TOKEN_KEY)
    }

    pub fn discard_demo(&mut self) -> StoreResult<()> {
        self.store.remove(DEMO_USER_KEY)
    }

    /// Remove all three keys. Every removal is attempted; the first failure is returned.
    pub fn clear(&mut self) -> StoreResult<()> {
        let results = [
            self.store.remove(ACCESS_TOKEN_KEY),
            self.store.remove(REFRESH_TOKEN_KEY),
            self.store.remove(DEMO_USER_KEY),
        ];
        results.into_iter().collect()
    }

    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }
}
