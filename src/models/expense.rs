//! Expense model
//!
//! A single spending record. Expenses carry a free-form category string;
//! the reserved category `"saving"` marks contributions toward a savings
//! goal rather than ordinary spending.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::ids::ExpenseId;
use super::money::Money;

/// Reserved category marking goal-contribution records
pub const SAVING_CATEGORY: &str = "saving";

/// Categories offered when recording an expense
pub const DEFAULT_CATEGORIES: [&str; 22] = [
    "Groceries",
    "Transport",
    "Entertainment",
    "Utilities",
    "Shopping",
    "Health",
    "Dining",
    "Education",
    "Travel",
    "Personal Care",
    "Insurance",
    "Taxes",
    "Gifts",
    "Charity",
    "Subscriptions",
    "Home Improvement",
    "Automotive",
    "Childcare",
    "Pet Care",
    "Mortgage",
    "Miscellaneous",
    "Other",
];

/// A spending record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// Amount spent (always positive once validated)
    pub amount: Money,

    /// The calendar date of the expense
    pub date: NaiveDate,

    /// Free-form description. For `"saving"` records this is the name of
    /// the goal the contribution counts toward.
    #[serde(default)]
    pub description: String,

    /// Category name; `"saving"` is reserved for goal contributions
    pub category: String,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense
    pub fn new(
        amount: Money,
        date: NaiveDate,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            amount,
            date,
            description: description.into(),
            category: category.into(),
            created_at: Utc::now(),
        }
    }

    /// Check if this record is a goal contribution
    pub fn is_saving(&self) -> bool {
        self.category == SAVING_CATEGORY
    }
}
