//! JSON export functionality
//!
//! Serializes a period report into a machine-readable document with a
//! versioned schema.

use std::io::Write;

use serde::Serialize;

use crate::error::{SmartSpendError, SmartSpendResult};
use crate::models::Expense;
use crate::reports::PeriodReport;

/// Schema version of the JSON report document
pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct CategoryTotal {
    category: String,
    total_cents: i64,
}

/// Serializable shape of a period report
#[derive(Debug, Serialize)]
pub struct ReportDocument {
    schema_version: u32,
    period: String,
    view: String,
    total_spent_cents: i64,
    total_saved_cents: i64,
    saving_percent: u8,
    categories: Vec<CategoryTotal>,
    expenses: Vec<Expense>,
}

impl ReportDocument {
    /// Flatten a report into its export shape
    pub fn from_report(report: &PeriodReport) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            period: report.selection.label.clone(),
            view: report.granularity.to_string(),
            total_spent_cents: report.summary.total_spent.cents(),
            total_saved_cents: report.summary.total_saved.cents(),
            saving_percent: report.saving_percent,
            categories: report
                .summary
                .by_category
                .iter()
                .map(|(category, total)| CategoryTotal {
                    category: category.clone(),
                    total_cents: total.cents(),
                })
                .collect(),
            expenses: report.summary.expenses.clone(),
        }
    }
}

/// Export a period report to pretty-printed JSON
pub fn export_period_report_json<W: Write>(
    report: &PeriodReport,
    writer: W,
) -> SmartSpendResult<()> {
    let document = ReportDocument::from_report(report);
    serde_json::to_writer_pretty(writer, &document)
        .map_err(|e| SmartSpendError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SmartSpendPaths;
    use crate::models::{Granularity, Money, SAVING_CATEGORY};
    use crate::storage::Storage;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_json_document_shape() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SmartSpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();

        storage
            .expenses
            .upsert(Expense::new(
                Money::from_cents(2000),
                NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(),
                "Trip",
                SAVING_CATEGORY,
            ))
            .unwrap();

        let report =
            PeriodReport::generate(&storage, Granularity::Monthly, Some("July 2025")).unwrap();

        let mut buffer = Vec::new();
        export_period_report_json(&report, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["period"], "July 2025");
        assert_eq!(value["view"], "monthly");
        assert_eq!(value["total_saved_cents"], 2000);
        assert_eq!(value["expenses"].as_array().unwrap().len(), 1);
        assert_eq!(value["categories"][0]["category"], "saving");
    }
}
