//! Key-value persistence of string collections.
//!
//! Collections are addressed by a namespace plus a key and always written
//! whole. Order and duplicates survive a round trip.

mod memory;

use anyhow::Result;

pub use memory::MemoryStorage;

pub const DEFAULT_NAMESPACE: &str = "StopwatchPrefs";
pub const SAVED_TIMES_KEY: &str = "SavedTimes";

#[allow(async_fn_in_trait)]
pub trait Storage {
    /// Returns `default` when nothing was ever stored under `namespace`/`key`.
    async fn get_string_collection(
        &self,
        namespace: &str,
        key: &str,
        default: Vec<String>,
    ) -> Result<Vec<String>>;

    /// Replaces whatever was stored under `namespace`/`key`.
    async fn put_string_collection(&self, namespace: &str, key: &str, items: &[String])
        -> Result<()>;
}
