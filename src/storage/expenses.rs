//! Expense repository
//!
//! Handles persistence of expense records to JSON files.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SmartSpendError;
use crate::models::{Expense, ExpenseId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// Repository for expense records
pub struct ExpenseRepository {
    path: PathBuf,
    expenses: RwLock<HashMap<ExpenseId, Expense>>,
}

impl ExpenseRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            expenses: RwLock::new(HashMap::new()),
        }
    }

    /// Load expenses from disk
    pub fn load(&self) -> Result<(), SmartSpendError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        expenses.clear();
        for expense in file_data.expenses {
            expenses.insert(expense.id, expense);
        }

        Ok(())
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), SmartSpendError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = expenses.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = ExpenseData { expenses: list };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, SmartSpendError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(expenses.get(&id).cloned())
    }

    /// Get all expenses, ordered by creation time
    pub fn get_all(&self) -> Result<Vec<Expense>, SmartSpendError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = expenses.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    /// Upsert an expense (insert or update)
    pub fn upsert(&self, expense: Expense) -> Result<(), SmartSpendError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        expenses.insert(expense.id, expense);
        Ok(())
    }

    /// Delete an expense, returning the removed record if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, SmartSpendError> {
        let mut expenses = self
            .expenses
            .write()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(expenses.remove(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn expense(cents: i64, category: &str) -> Expense {
        Expense::new(
            Money::from_cents(cents),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            "",
            category,
        )
    }

    #[test]
    fn test_upsert_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));

        let e = expense(5000, "Groceries");
        let id = e.id;
        repo.upsert(e).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.cents(), 5000);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");

        let id = {
            let repo = ExpenseRepository::new(path.clone());
            let e = expense(1200, "Transport");
            let id = e.id;
            repo.upsert(e).unwrap();
            repo.save().unwrap();
            id
        };

        let repo = ExpenseRepository::new(path);
        repo.load().unwrap();
        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.category, "Transport");
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));

        let e = expense(800, "Dining");
        let id = e.id;
        repo.upsert(e).unwrap();

        assert!(repo.delete(id).unwrap().is_some());
        assert!(repo.get(id).unwrap().is_none());
        assert!(repo.delete(id).unwrap().is_none());
    }

    #[test]
    fn test_get_all_ordered_by_creation() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ExpenseRepository::new(temp_dir.path().join("expenses.json"));

        let first = expense(100, "Groceries");
        let second = expense(200, "Dining");
        let first_id = first.id;
        repo.upsert(first).unwrap();
        repo.upsert(second).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first_id);
    }
}
