//! Core data models for SmartSpend

pub mod expense;
pub mod goal;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;

pub use expense::{Expense, DEFAULT_CATEGORIES, SAVING_CATEGORY};
pub use goal::{Goal, GoalProgress};
pub use ids::{ExpenseId, GoalId, IncomeId};
pub use income::Income;
pub use money::{round_half_to_even, Money, MoneyParseError};
pub use period::{week_of_year, Granularity, PeriodKey};
