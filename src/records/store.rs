use anyhow::{Context, Result};

use crate::storage::Storage;

use super::SavedRecord;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

/// Ordered list of rendered saved records, mirrored to storage on every change.
pub struct RecordStore<S> {
    storage: S,
    namespace: String,
    key: String,
    entries: Vec<String>,
}

impl<S: Storage> RecordStore<S> {
    pub fn new(storage: S, namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            storage,
            namespace: namespace.into(),
            key: key.into(),
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Replaces the in-memory list with what storage holds.
    pub async fn load(&mut self) -> Result<()> {
        self.entries = self
            .storage
            .get_string_collection(&self.namespace, &self.key, Vec::new())
            .await
            .with_context(|| format!("failed to load {}/{}", self.namespace, self.key))?;
        log_info!("loaded {} saved records", self.entries.len());
        Ok(())
    }

    /// Appends `"label - time"`. Returns `false` without touching storage when
    /// the trimmed label is empty.
    pub async fn add(&mut self, label: &str, formatted_time: &str) -> Result<bool> {
        let Some(record) = SavedRecord::new(label, formatted_time) else {
            return Ok(false);
        };

        self.entries.push(record.to_string());
        self.persist().await?;
        Ok(true)
    }

    /// Returns `false` without touching storage when `index` is out of range.
    pub async fn remove_at(&mut self, index: usize) -> Result<bool> {
        if index >= self.entries.len() {
            return Ok(false);
        }

        let removed = self.entries.remove(index);
        log_info!("removed saved record '{removed}'");
        self.persist().await?;
        Ok(true)
    }

    async fn persist(&self) -> Result<()> {
        self.storage
            .put_string_collection(&self.namespace, &self.key, &self.entries)
            .await
            .with_context(|| format!("failed to persist {}/{}", self.namespace, self.key))
    }
}
