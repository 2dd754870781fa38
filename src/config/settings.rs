//! User settings for SmartSpend
//!
//! Manages user preferences: the default summary granularity, currency
//! symbol, date format, and the maximum accepted expense amount.

use serde::{Deserialize, Serialize};

use super::paths::SmartSpendPaths;
use crate::error::SmartSpendError;
use crate::models::{Granularity, Money};

/// User settings for SmartSpend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Default summary granularity when none is given on the command line
    #[serde(default)]
    pub granularity: Granularity,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Largest expense amount accepted by validation
    #[serde(default = "default_max_expense")]
    pub max_expense_amount: Money,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_max_expense() -> Money {
    Money::from_cents(100_000_000) // $1,000,000.00
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            granularity: Granularity::default(),
            currency_symbol: default_currency(),
            max_expense_amount: default_max_expense(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &SmartSpendPaths) -> Result<Self, SmartSpendError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SmartSpendError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SmartSpendError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SmartSpendPaths) -> Result<(), SmartSpendError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SmartSpendError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SmartSpendError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
