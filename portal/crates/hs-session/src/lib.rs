//! Client-side session management for the Heritage Shipping portal.
//!
//! [`SessionManager`] resolves the persisted credential once at startup and
//! serializes every sign-in and sign-out behind one lock. Screens that need a
//! signed-in user consult [`access_gate::evaluate`].

pub mod access_gate;
pub(crate) mod credential_store;
pub mod demo;
pub(crate) mod error;
pub(crate) mod route;
pub(crate) mod session;
pub(crate) mod session_manager;
pub(crate) mod store;

#[cfg(test)]
mod tests;

pub use access_gate::GateDecision;
pub use credential_store::{
    ACCESS_TOKEN_KEY, CredentialStore, DEMO_USER_KEY, LoadResult, REFRESH_TOKEN_KEY,
};
pub use demo::DemoAccount;
pub use error::{Result as SessionResult, SessionError};
pub use route::Route;
pub use session::{Session, SessionState};
pub use session_manager::SessionManager;
pub use store::{
    KeyValueStore,
    error::{Result as StoreResult, StoreError},
    file_store::FileStore,
    memory_store::MemoryStore,
};
