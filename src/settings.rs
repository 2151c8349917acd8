use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::storage::{DEFAULT_NAMESPACE, SAVED_TIMES_KEY};

pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How often the running time is redrawn.
    pub tick_interval_ms: u64,
    /// Relative paths resolve against the data directory.
    pub database_file: PathBuf,
    pub namespace: String,
    pub records_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            database_file: PathBuf::from("lapwatch.sqlite3"),
            namespace: DEFAULT_NAMESPACE.into(),
            records_key: SAVED_TIMES_KEY.into(),
        }
    }
}

impl Settings {
    /// Like [`Settings::load`], but a missing file is created with the
    /// defaults.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save(path)?;
            return Ok(settings);
        }
        Self::load(path)
    }

    /// Reads `path`, falling back to defaults when the file is missing or
    /// unparseable. Never writes.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings = serde_json::from_str(&contents).unwrap_or_else(|err| {
            warn!("Ignoring unreadable settings at {}: {err}", path.display());
            Self::default()
        });
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let serialized = serde_json::to_string_pretty(self)?;
        fs::write(path, serialized)
            .with_context(|| format!("Failed to write settings to {}", path.display()))
    }

    /// Zero would spin the tick task, so it is clamped to 1ms.
    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms.max(1)
    }

    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        if self.database_file.is_absolute() {
            self.database_file.clone()
        } else {
            data_dir.join(&self.database_file)
        }
    }
}
