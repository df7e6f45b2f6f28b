//! User settings for cashflow-cli
//!
//! Persists presentation and analysis preferences as JSON in the config
//! directory. Every field carries a serde default so older settings files
//! keep loading as fields are added.

use serde::{Deserialize, Serialize};

use super::paths::CashflowPaths;
use crate::error::CashflowError;

/// User settings for cashflow-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol printed before amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Currency code printed after amounts
    #[serde(default = "default_currency_code")]
    pub currency_code: String,

    /// Expense alert threshold as a fraction of total expenses
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold: f64,

    /// Number of future months the projection covers
    #[serde(default = "default_projection_horizon")]
    pub projection_horizon: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_currency_code() -> String {
    "COP".to_string()
}

fn default_alert_threshold() -> f64 {
    crate::reports::DEFAULT_THRESHOLD
}

fn default_projection_horizon() -> usize {
    crate::reports::DEFAULT_HORIZON
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency_symbol(),
            currency_code: default_currency_code(),
            alert_threshold: default_alert_threshold(),
            projection_horizon: default_projection_horizon(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CashflowPaths) -> Result<Self, CashflowError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| CashflowError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CashflowError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CashflowPaths) -> Result<(), CashflowError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CashflowError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| CashflowError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.currency_code, "COP");
        assert_eq!(settings.alert_threshold, 0.2);
        assert_eq!(settings.projection_horizon, 4);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.currency_code = "USD".to_string();
        settings.alert_threshold = 0.3;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_code, "USD");
        assert_eq!(loaded.alert_threshold, 0.3);
    }

    #[test]
    fn test_load_without_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_code, "COP");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = CashflowPaths::with_base_dir(temp_dir.path().to_path_buf());
        paths.ensure_directories().unwrap();
        std::fs::write(paths.settings_file(), r#"{"currency_code":"EUR"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.currency_code, "EUR");
        assert_eq!(settings.alert_threshold, 0.2);
        assert_eq!(settings.projection_horizon, 4);
    }
}
