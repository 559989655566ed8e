//! User settings for TrackIt
//!
//! Manages user preferences: the currency symbol used for display and the
//! month commands fall back to when none is given.

use serde::{Deserialize, Serialize};

use super::paths::TrackItPaths;
use crate::error::TrackItError;
use crate::models::Month;

/// User settings for TrackIt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to displayed amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Month used when a command omits one (current month if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_month: Option<Month>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rs.".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_month: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackItPaths) -> Result<Self, TrackItError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackItError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackItError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackItPaths) -> Result<(), TrackItError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackItError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            TrackItError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolve the month a command should operate on
    pub fn resolve_month(&self, requested: Option<Month>) -> Month {
        requested
            .or(self.default_month)
            .unwrap_or_else(Month::current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.currency_symbol, "Rs.");
        assert!(settings.default_month.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackItPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "₹".into(),
            default_month: Some(Month::February),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "₹");
        assert_eq!(loaded.default_month, Some(Month::February));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.currency_symbol, "Rs.");
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_resolve_month_prefers_request() {
        let settings = Settings {
            default_month: Some(Month::June),
            ..Settings::default()
        };
        assert_eq!(settings.resolve_month(Some(Month::May)), Month::May);
        assert_eq!(settings.resolve_month(None), Month::June);
    }
}
