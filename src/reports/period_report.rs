//! Period report
//!
//! Shapes one period's aggregation output for presentation and export.
//! The summary view and the export command both consume this single
//! projection, so their numbers cannot drift apart.

use tracing::error;

use crate::error::SmartSpendResult;
use crate::models::{Granularity, Money};
use crate::services::{
    saving_progress_percent, PeriodResolver, PeriodSelection, Summary, SummaryService,
};
use crate::storage::Storage;

/// A period summary resolved and shaped for rendering or export
#[derive(Debug, Clone)]
pub struct PeriodReport {
    /// The aggregation mode the report was built with
    pub granularity: Granularity,
    /// The resolved period and its display label
    pub selection: PeriodSelection,
    /// Labels of every listed period, most recent first
    pub available_labels: Vec<String>,
    /// The period's totals and matching records
    pub summary: Summary,
    /// Progress toward the active goal within this period, 0-100
    pub saving_percent: u8,
}

impl PeriodReport {
    /// Build the report for a requested period label.
    ///
    /// No request selects the most recent listed period; an unknown
    /// label falls back to the current period. Aggregation faults
    /// degrade to empty totals rather than failing the report.
    pub fn generate(
        storage: &Storage,
        granularity: Granularity,
        requested_label: Option<&str>,
    ) -> SmartSpendResult<Self> {
        let service = SummaryService::new(storage);
        let resolver = PeriodResolver::new(granularity);

        let keys = service.list_periods(granularity)?;
        let labels = service.period_labels(&keys);
        let selection = resolver.select(requested_label, &labels, &keys);

        let summary = service.summarize_or_default(selection.key);

        let active_goal = match storage.goals.active() {
            Ok(goal) => goal,
            Err(err) => {
                error!(error = %err, "failed to read active goal, reporting zero progress");
                None
            }
        };
        let saving_percent = saving_progress_percent(
            summary.total_saved,
            active_goal.map(|g| g.target_amount),
        );

        Ok(Self {
            granularity,
            selection,
            available_labels: labels,
            summary,
            saving_percent,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("SmartSpend Report - {}\n", self.selection.label));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        output.push_str("\nExpenses:\n");
        if self.summary.expenses.is_empty() {
            output.push_str("  (no expenses in this period)\n");
        } else {
            output.push_str(&format!(
                "  {:<12} {:>12}  {:<20}\n",
                "Date", "Amount", "Category"
            ));
            output.push_str(&format!("  {}\n", "-".repeat(46)));
            for expense in &self.summary.expenses {
                output.push_str(&format!(
                    "  {:<12} {:>12}  {:<20}\n",
                    expense.date.format("%Y-%m-%d"),
                    expense.amount.to_string(),
                    expense.category
                ));
            }
        }

        if !self.summary.by_category.is_empty() {
            output.push_str("\nCategory Summary:\n");
            output.push_str(&format!("  {:<20} {:>12}\n", "Category", "Total"));
            output.push_str(&format!("  {}\n", "-".repeat(33)));
            for (category, total) in &self.summary.by_category {
                output.push_str(&format!(
                    "  {:<20} {:>12}\n",
                    category,
                    total.to_string()
                ));
            }
        }

        output.push_str("\nTotals:\n");
        output.push_str(&format!(
            "  Total spent in this time period: {}\n",
            self.summary.total_spent
        ));
        output.push_str(&format!(
            "  Total saved in this time period: {}\n",
            self.summary.total_saved
        ));
        output.push_str(&format!(
            "  Saving Goal Progress: {}%\n",
            self.saving_percent
        ));

        output
    }

    /// Total across every record in the period, `"saving"` included
    pub fn period_total(&self) -> Money {
        self.summary.total_spent + self.summary.total_saved
    }
}
