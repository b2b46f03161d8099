pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;

use crate::store::error::Result as StoreResult;

/// String key-value persistence for session credentials.
///
/// Reads are served from memory; writes go straight to the backing medium.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}
