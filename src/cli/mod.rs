//! CLI command handlers

pub mod expense;
pub mod goal;
pub mod income;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_dashboard, handle_export, handle_summary};

use chrono::{Local, NaiveDate};

use crate::config::settings::Settings;
use crate::error::{SmartSpendError, SmartSpendResult};
use crate::models::Granularity;

/// Parse a date argument with the configured format, defaulting to today
pub(crate) fn parse_date(input: Option<&str>, settings: &Settings) -> SmartSpendResult<NaiveDate> {
    match input {
        Some(s) => NaiveDate::parse_from_str(s, &settings.date_format).map_err(|_| {
            SmartSpendError::Validation(format!(
                "Invalid date '{}' (expected format {})",
                s, settings.date_format
            ))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

/// Resolve the view-mode argument, defaulting to the configured granularity
pub(crate) fn resolve_granularity(
    view: Option<&str>,
    settings: &Settings,
) -> SmartSpendResult<Granularity> {
    match view {
        Some(v) => v.parse().map_err(SmartSpendError::Validation),
        None => Ok(settings.granularity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let settings = Settings::default();
        let date = parse_date(Some("2025-07-15"), &settings).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 7, 15).unwrap());

        assert!(parse_date(Some("15/07/2025"), &settings).is_err());
        assert!(parse_date(None, &settings).is_ok());
    }

    #[test]
    fn test_resolve_granularity() {
        let settings = Settings::default();
        assert_eq!(
            resolve_granularity(None, &settings).unwrap(),
            Granularity::Monthly
        );
        assert_eq!(
            resolve_granularity(Some("weekly"), &settings).unwrap(),
            Granularity::Weekly
        );
        assert!(resolve_granularity(Some("hourly"), &settings).is_err());
    }
}
