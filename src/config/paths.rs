//! Path management for Moneta
//!
//! ## Path Resolution Order
//!
//! 1. `MONETA_DATA_DIR` environment variable (if set)
//! 2. The platform data directory for `net.akrain.moneta`
//!    (e.g. `~/.local/share/moneta` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::MonetaError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "MONETA_DATA_DIR";

/// Manages all paths used by Moneta
#[derive(Debug, Clone)]
pub struct MonetaPaths {
    base_dir: PathBuf,
}

impl MonetaPaths {
    /// Resolve the base directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be found and the override
    /// is not set.
    pub fn new() -> Result<Self, MonetaError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MonetaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the slot files (`expenses.json`, ...)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the persisted expense collection
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), MonetaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MonetaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MonetaError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, MonetaError> {
    ProjectDirs::from("net", "akrain", "moneta")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| MonetaError::Config("Could not determine a home directory".into()))
}
