use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use anyhow::Result;

use super::Storage;

type Collections = HashMap<(String, String), Vec<String>>;

/// Storage that lives as long as the process. Clones share contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    collections: Arc<Mutex<Collections>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// What is currently stored, or `None` if the collection was never written.
    pub fn snapshot(&self, namespace: &str, key: &str) -> Option<Vec<String>> {
        lock(&self.collections)
            .get(&(namespace.to_string(), key.to_string()))
            .cloned()
    }

    /// Number of `put_string_collection` calls so far.
    pub fn write_count(&self) -> usize {
        *lock(&self.writes)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

impl Storage for MemoryStorage {
    async fn get_string_collection(
        &self,
        namespace: &str,
        key: &str,
        default: Vec<String>,
    ) -> Result<Vec<String>> {
        Ok(self.snapshot(namespace, key).unwrap_or(default))
    }

    async fn put_string_collection(
        &self,
        namespace: &str,
        key: &str,
        items: &[String],
    ) -> Result<()> {
        lock(&self.collections).insert((namespace.to_string(), key.to_string()), items.to_vec());
        *lock(&self.writes) += 1;
        Ok(())
    }
}
