//! Path management for cashflow-cli
//!
//! Resolves where settings live on disk.
//!
//! ## Path Resolution Order
//!
//! 1. `CASHFLOW_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform config directory via `directories::ProjectDirs`
//!    (Linux: `~/.config/cashflow-cli`, macOS: `~/Library/Application
//!    Support/cashflow-cli`, Windows: `%APPDATA%\cashflow-cli`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::CashflowError;

/// Manages all paths used by cashflow-cli
#[derive(Debug, Clone)]
pub struct CashflowPaths {
    /// Base directory for all cashflow-cli data
    base_dir: PathBuf,
}

impl CashflowPaths {
    /// Create a new CashflowPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined for the
    /// current user.
    pub fn new() -> Result<Self, CashflowError> {
        let base_dir = if let Ok(custom) = std::env::var("CASHFLOW_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create CashflowPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), CashflowError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CashflowError::Io(format!("Failed to create base directory: {}", e)))?;

        Ok(())
    }

    /// Check if cashflow-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory for the platform
fn resolve_default_path() -> Result<PathBuf, CashflowError> {
    let dirs = ProjectDirs::from("", "", "cashflow-cli").ok_or_else(|| {
        CashflowError::Config("Could not determine a home directory for settings".into())
    })?;
    Ok(dirs.config_dir().to_path_buf())
}
