//! Storage layer for SmartSpend
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Every operation receives an explicit `Storage` handle; there
//! is no global connection state.

pub mod expenses;
pub mod file_io;
pub mod goals;
pub mod income;

pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use income::IncomeRepository;

use crate::config::paths::SmartSpendPaths;
use crate::error::SmartSpendError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SmartSpendPaths,
    pub expenses: ExpenseRepository,
    pub income: IncomeRepository,
    pub goals: GoalRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SmartSpendPaths) -> Result<Self, SmartSpendError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            income: IncomeRepository::new(paths.income_file()),
            goals: GoalRepository::new(paths.goals_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SmartSpendPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SmartSpendError> {
        self.expenses.load()?;
        self.income.load()?;
        self.goals.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SmartSpendError> {
        self.expenses.save()?;
        self.income.save()?;
        self.goals.save()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SmartSpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        storage.save_all().unwrap();
        assert!(storage.paths().expenses_file().exists());
    }
}
