use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use directories::ProjectDirs;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal stopwatch with named saved times", long_about = None)]
pub struct Args {
    /// Directory holding the database and settings
    #[arg(short, long, env = "LAPWATCH_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Settings file (defaults to <data-dir>/settings.json)
    #[arg(short, long)]
    pub settings: Option<PathBuf>,

    /// Redraw interval while running, in milliseconds
    #[arg(short, long)]
    pub tick_ms: Option<u64>,

    /// Keep saved times in memory only
    #[arg(long, default_value_t = false)]
    pub ephemeral: bool,

    /// Log at debug level
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// `--data-dir`, else the platform data directory for lapwatch.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        ProjectDirs::from("", "", "lapwatch")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| anyhow!("no home directory to keep data in; pass --data-dir"))
    }

    pub fn resolved_settings_path(&self) -> Result<PathBuf> {
        match &self.settings {
            Some(path) => Ok(path.clone()),
            None => Ok(self.resolved_data_dir()?.join("settings.json")),
        }
    }
}
