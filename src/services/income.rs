//! Income service
//!
//! Maintains the current yearly income snapshot. Monthly and weekly
//! figures are derived on read, never written.

use crate::config::settings::Settings;
use crate::error::SmartSpendResult;
use crate::models::Income;
use crate::storage::Storage;

use super::expense::parse_amount;

/// Service for income management
pub struct IncomeService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Record a new income snapshot, making it current
    pub fn set_income(&self, yearly: &str) -> SmartSpendResult<Income> {
        let yearly = parse_amount(yearly, self.settings.max_expense_amount)?;

        let income = Income::new(yearly);
        self.storage.income.add(income.clone())?;
        self.storage.income.save()?;

        Ok(income)
    }

    /// Update the current snapshot in place, or create one if none exists
    pub fn update_income(&self, yearly: &str) -> SmartSpendResult<Income> {
        let amount = parse_amount(yearly, self.settings.max_expense_amount)?;

        match self.storage.income.update_current(amount)? {
            Some(income) => {
                self.storage.income.save()?;
                Ok(income)
            }
            None => {
                let income = Income::new(amount);
                self.storage.income.add(income.clone())?;
                self.storage.income.save()?;
                Ok(income)
            }
        }
    }

    /// The current income snapshot, if any
    pub fn current(&self) -> SmartSpendResult<Option<Income>> {
        self.storage.income.current()
    }
}
