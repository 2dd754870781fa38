//! Income repository
//!
//! Income snapshots are append-mostly: the most recently created record
//! is the current income, older records are kept as history.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SmartSpendError;
use crate::models::{Income, Money};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct IncomeData {
    #[serde(default)]
    records: Vec<Income>,
}

/// Repository for income snapshots
pub struct IncomeRepository {
    path: PathBuf,
    records: RwLock<Vec<Income>>,
}

impl IncomeRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Load income records from disk
    pub fn load(&self) -> Result<(), SmartSpendError> {
        let file_data: IncomeData = read_json(&self.path)?;

        let mut records = self
            .records
            .write()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *records = file_data.records;
        records.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        Ok(())
    }

    /// Save income records to disk
    pub fn save(&self) -> Result<(), SmartSpendError> {
        let records = self
            .records
            .read()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = IncomeData {
            records: records.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Append a new snapshot, making it current
    pub fn add(&self, income: Income) -> Result<(), SmartSpendError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.push(income);
        Ok(())
    }

    /// The current income snapshot (most recently created), if any
    pub fn current(&self) -> Result<Option<Income>, SmartSpendError> {
        let records = self
            .records
            .read()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.last().cloned())
    }

    /// Replace the current snapshot's yearly amount in place.
    ///
    /// Returns the updated snapshot, or None when there is none to update.
    pub fn update_current(&self, yearly: Money) -> Result<Option<Income>, SmartSpendError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match records.last_mut() {
            Some(income) => {
                income.yearly = yearly;
                Ok(Some(income.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_record_is_current() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("income.json"));

        repo.add(Income::new(Money::from_cents(4_000_000))).unwrap();
        repo.add(Income::new(Money::from_cents(5_000_000))).unwrap();

        let current = repo.current().unwrap().unwrap();
        assert_eq!(current.yearly.cents(), 5_000_000);
    }

    #[test]
    fn test_update_current() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("income.json"));

        assert!(repo.update_current(Money::from_cents(100)).unwrap().is_none());

        repo.add(Income::new(Money::from_cents(4_000_000))).unwrap();
        assert!(repo
            .update_current(Money::from_cents(4_500_000))
            .unwrap()
            .is_some());

        let current = repo.current().unwrap().unwrap();
        assert_eq!(current.yearly.cents(), 4_500_000);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("income.json");

        {
            let repo = IncomeRepository::new(path.clone());
            repo.add(Income::new(Money::from_cents(6_000_000))).unwrap();
            repo.save().unwrap();
        }

        let repo = IncomeRepository::new(path);
        repo.load().unwrap();
        assert_eq!(
            repo.current().unwrap().unwrap().yearly.cents(),
            6_000_000
        );
    }
}
