//! Library configuration: where the database lives and the payroll
//! defaults (rounding interval, weekly overtime threshold). Stored as YAML
//! in a per-user config directory.

use crate::errors::{AppError, AppResult};
use crate::utils::path::resolve_db_path;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_rounding_minutes")]
    pub rounding_minutes: u32,
    #[serde(default = "default_weekly_threshold_hours")]
    pub weekly_threshold_hours: f64,
}

fn default_rounding_minutes() -> u32 {
    15
}

fn default_weekly_threshold_hours() -> f64 {
    40.0
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            rounding_minutes: default_rounding_minutes(),
            weekly_threshold_hours: default_weekly_threshold_hours(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rtimeclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rtimeclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.conf")
    }

    /// Return the default full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rtimeclock.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Write the configuration back, creating the config directory if needed
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;

        let yaml =
            serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// The configured database path with `~` expanded; relative paths are
    /// anchored at the config directory.
    pub fn database_path(&self) -> PathBuf {
        resolve_db_path(&self.database, &Self::config_dir())
    }
}
