//! Path management for TrackIt
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` command line flag (handled by the caller via [`TrackItPaths::with_base_dir`])
//! 2. `TRACKIT_DATA_DIR` environment variable (if set)
//! 3. Unix (Linux/macOS): `$XDG_CONFIG_HOME/trackit` or `~/.config/trackit`
//! 4. Windows: `%APPDATA%\trackit`

use std::path::PathBuf;

use crate::error::TrackItError;
use crate::models::Month;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "TRACKIT_DATA_DIR";

/// Manages all paths used by TrackIt
#[derive(Debug, Clone)]
pub struct TrackItPaths {
    /// Base directory for all TrackIt data
    base_dir: PathBuf,
}

impl TrackItPaths {
    /// Create a new TrackItPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TrackItError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create TrackItPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/trackit/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the month and limit files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the transactions file for a month, e.g. `data/January.csv`
    pub fn month_file(&self, month: Month) -> PathBuf {
        self.data_dir().join(format!("{}.csv", month.name()))
    }

    /// Get the shared limits file
    pub fn limits_file(&self) -> PathBuf {
        self.data_dir().join("limits.csv")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TrackItError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TrackItError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TrackItError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if TrackIt has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TrackItError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                TrackItError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("trackit"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TrackItError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TrackItError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("trackit"))
}
