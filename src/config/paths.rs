//! Path management for ExpenseWise
//!
//! Provides XDG-compliant path resolution for the data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `EXPENSEWISE_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/expensewise` or `~/.config/expensewise`
//! 3. Windows: `%APPDATA%\expensewise`

use std::path::PathBuf;

use crate::error::ExpenseWiseError;

/// Manages all paths used by ExpenseWise
#[derive(Debug, Clone)]
pub struct ExpenseWisePaths {
    /// Base directory for all ExpenseWise data
    base_dir: PathBuf,
}

impl ExpenseWisePaths {
    /// Create a new ExpenseWisePaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ExpenseWiseError> {
        let base_dir = if let Ok(custom) = std::env::var("EXPENSEWISE_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create ExpenseWisePaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/expensewise/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/expensewise/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to transactions.json
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Get the path to budget_preferences.json
    pub fn budget_preferences_file(&self) -> PathBuf {
        self.data_dir().join("budget_preferences.json")
    }

    /// Get the path to currency.json
    pub fn currency_file(&self) -> PathBuf {
        self.data_dir().join("currency.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), ExpenseWiseError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ExpenseWiseError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ExpenseWiseError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, ExpenseWiseError> {
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("expensewise"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, ExpenseWiseError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| ExpenseWiseError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("expensewise"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpenseWisePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpenseWisePaths::with_base_dir(temp_dir.path().to_path_buf());
        let data = temp_dir.path().join("data");

        assert_eq!(paths.transactions_file(), data.join("transactions.json"));
        assert_eq!(paths.budgets_file(), data.join("budgets.json"));
        assert_eq!(
            paths.budget_preferences_file(),
            data.join("budget_preferences.json")
        );
        assert_eq!(paths.currency_file(), data.join("currency.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpenseWisePaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();
        assert!(paths.data_dir().exists());
    }
}
