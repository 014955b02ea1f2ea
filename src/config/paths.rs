//! Path management for Pocketbook
//!
//! Resolves where configuration, ledger data, photos, history snapshots and
//! exports live.
//!
//! ## Path Resolution Order
//!
//! 1. `POCKETBOOK_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory reported by `directories`
//!    (`~/.config/pocketbook` on Linux, `~/Library/Application Support/pocketbook`
//!    on macOS, `%APPDATA%\pocketbook\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::PocketbookError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "POCKETBOOK_DATA_DIR";

/// Manages all paths used by Pocketbook
#[derive(Debug, Clone)]
pub struct PocketbookPaths {
    /// Base directory for all Pocketbook data
    base_dir: PathBuf,
}

impl PocketbookPaths {
    /// Create a new PocketbookPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, PocketbookError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create PocketbookPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the directory holding uploaded profile photos
    pub fn photos_dir(&self) -> PathBuf {
        self.base_dir.join("photos")
    }

    /// Get the directory holding per-month history snapshots
    pub fn history_dir(&self) -> PathBuf {
        self.base_dir.join("history")
    }

    /// Get the default directory for exported reports
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to person.json
    pub fn person_file(&self) -> PathBuf {
        self.data_dir().join("person.json")
    }

    /// Get the path to categories.json
    pub fn categories_file(&self) -> PathBuf {
        self.data_dir().join("categories.json")
    }

    /// Get the path to income.json
    pub fn income_file(&self) -> PathBuf {
        self.data_dir().join("income.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), PocketbookError> {
        for (label, dir) in [
            ("base", self.base_dir.clone()),
            ("data", self.data_dir()),
            ("photos", self.photos_dir()),
            ("history", self.history_dir()),
        ] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                PocketbookError::Io(format!("Failed to create {} directory: {}", label, e))
            })?;
        }

        Ok(())
    }

    /// Check if Pocketbook has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, PocketbookError> {
    ProjectDirs::from("", "", "pocketbook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| PocketbookError::Config("Could not determine home directory".into()))
}
