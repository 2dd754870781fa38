//! CSV export functionality
//!
//! Flattens a period report into spreadsheet-compatible rows: one row
//! per expense, one row per category total, and three closing total
//! lines (spent, saved, goal progress).

use std::io::Write;

use crate::error::{SmartSpendError, SmartSpendResult};
use crate::models::Money;
use crate::reports::PeriodReport;

fn amount_field(amount: Money) -> String {
    format!("{:.2}", amount.cents() as f64 / 100.0)
}

/// Export a period report to CSV
pub fn export_period_report_csv<W: Write>(
    report: &PeriodReport,
    writer: W,
) -> SmartSpendResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Section", "Date", "Amount", "Category"])
        .map_err(|e| SmartSpendError::Export(e.to_string()))?;

    for expense in &report.summary.expenses {
        let date = expense.date.format("%Y-%m-%d").to_string();
        let amount = amount_field(expense.amount);
        csv_writer
            .write_record(["Expense", date.as_str(), amount.as_str(), &expense.category])
            .map_err(|e| SmartSpendError::Export(e.to_string()))?;
    }

    for (category, total) in &report.summary.by_category {
        let amount = amount_field(*total);
        csv_writer
            .write_record(["Category Total", "", amount.as_str(), category.as_str()])
            .map_err(|e| SmartSpendError::Export(e.to_string()))?;
    }

    let spent = amount_field(report.summary.total_spent);
    csv_writer
        .write_record(["Total Spent", "", spent.as_str(), ""])
        .map_err(|e| SmartSpendError::Export(e.to_string()))?;

    let saved = amount_field(report.summary.total_saved);
    csv_writer
        .write_record(["Total Saved", "", saved.as_str(), ""])
        .map_err(|e| SmartSpendError::Export(e.to_string()))?;

    let percent = format!("{}%", report.saving_percent);
    csv_writer
        .write_record(["Saving Goal Progress", "", percent.as_str(), ""])
        .map_err(|e| SmartSpendError::Export(e.to_string()))?;

    csv_writer
        .flush()
        .map_err(|e| SmartSpendError::Export(e.to_string()))?;

    Ok(())
}
