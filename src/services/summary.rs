//! Summary aggregation service
//!
//! The aggregation engine: buckets expenses into periods, computes the
//! per-period totals consumed by the summary view and the report export,
//! and links savings goals to their contribution records.
//!
//! Aggregation is display-only statistics for a single-user tool, so the
//! service fails open: `summarize_or_default` turns any internal fault
//! into zero totals and empty lists, logging the error instead of
//! surfacing it.

use std::collections::{BTreeMap, HashSet};

use chrono::{Datelike, Duration, Local};
use tracing::error;

use crate::error::{SmartSpendError, SmartSpendResult};
use crate::models::{
    round_half_to_even, Expense, Goal, GoalProgress, Granularity, Income, Money, PeriodKey,
};
use crate::storage::Storage;

/// Computed totals for one period
#[derive(Debug, Clone)]
pub struct Summary {
    /// The bucket these totals describe
    pub period: PeriodKey,
    /// Sum of amounts excluding the `"saving"` category
    pub total_spent: Money,
    /// Sum of `"saving"` amounts
    pub total_saved: Money,
    /// Per-category sums (every category in the period, `"saving"` included)
    pub by_category: BTreeMap<String, Money>,
    /// All records in the period, most recent date first
    pub expenses: Vec<Expense>,
}

impl Summary {
    /// An empty summary: zero totals, no records
    pub fn empty(period: PeriodKey) -> Self {
        Self {
            period,
            total_spent: Money::zero(),
            total_saved: Money::zero(),
            by_category: BTreeMap::new(),
            expenses: Vec::new(),
        }
    }
}

/// Progress toward the active goal as a whole percentage in [0, 100].
///
/// Ties round half-to-even. No active goal, or a target that is not
/// positive, yields 0.
pub fn saving_progress_percent(total_saved: Money, target: Option<Money>) -> u8 {
    let Some(target) = target else {
        return 0;
    };
    if !target.is_positive() {
        return 0;
    }
    let ratio = total_saved.cents() as f64 * 100.0 / target.cents() as f64;
    round_half_to_even(ratio).clamp(0, 100) as u8
}

/// Totals for the home dashboard: a rolling week window and the current
/// calendar month, plus all-time savings and the active goal
#[derive(Debug, Clone)]
pub struct Dashboard {
    /// Current income snapshot, if one has been recorded
    pub income: Option<Income>,
    /// Spend over the last 7 days, excluding `"saving"`
    pub week_spent: Money,
    /// Spend in the current calendar month, excluding `"saving"`
    pub month_spent: Money,
    /// Last-7-days per-category sums, excluding `"saving"`
    pub week_by_category: BTreeMap<String, Money>,
    /// Current-month per-category sums, excluding `"saving"`
    pub month_by_category: BTreeMap<String, Money>,
    /// All-time sum of `"saving"` records
    pub total_saved: Money,
    /// The goal currently tracked for progress display
    pub active_goal: Option<Goal>,
}

impl Dashboard {
    /// All-time progress toward the active goal
    pub fn saving_percent(&self) -> u8 {
        saving_progress_percent(
            self.total_saved,
            self.active_goal.as_ref().map(|g| g.target_amount),
        )
    }
}

/// Service computing period summaries and goal progress
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Distinct period keys derived from all stored expense dates,
    /// most recent first (ordered by underlying date, not by label)
    pub fn list_periods(&self, granularity: Granularity) -> SmartSpendResult<Vec<PeriodKey>> {
        let mut expenses = self.storage.expenses.get_all()?;
        expenses.sort_by(|a, b| b.date.cmp(&a.date));

        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        for expense in &expenses {
            let key = PeriodKey::for_date(expense.date, granularity);
            if seen.insert(key) {
                keys.push(key);
            }
        }

        Ok(keys)
    }

    /// Labels for a period listing, parallel to its keys
    pub fn period_labels(&self, keys: &[PeriodKey]) -> Vec<String> {
        keys.iter().map(|k| k.label()).collect()
    }

    /// Compute the totals for one period.
    ///
    /// Records match when their date resolves to `period` under the same
    /// week/month rule used by `list_periods`, so a listed period always
    /// finds its records.
    pub fn summarize(&self, period: PeriodKey) -> SmartSpendResult<Summary> {
        let granularity = period.granularity();
        let mut matching: Vec<Expense> = self
            .storage
            .expenses
            .get_all()
            .map_err(|e| SmartSpendError::Aggregation(e.to_string()))?
            .into_iter()
            .filter(|e| PeriodKey::for_date(e.date, granularity) == period)
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date));

        let mut summary = Summary::empty(period);
        for expense in &matching {
            if expense.is_saving() {
                summary.total_saved += expense.amount;
            } else {
                summary.total_spent += expense.amount;
            }
            *summary
                .by_category
                .entry(expense.category.clone())
                .or_insert(Money::zero()) += expense.amount;
        }
        summary.expenses = matching;

        Ok(summary)
    }

    /// Fail-open variant of [`summarize`](Self::summarize): any fault
    /// degrades to an empty summary and is logged, never propagated.
    pub fn summarize_or_default(&self, period: PeriodKey) -> Summary {
        match self.summarize(period) {
            Ok(summary) => summary,
            Err(err) => {
                error!(period = %period, error = %err, "summary aggregation failed, returning empty totals");
                Summary::empty(period)
            }
        }
    }

    /// Sum of contributions toward one goal: `"saving"` records whose
    /// description equals the goal name exactly (case-sensitive)
    pub fn goal_progress(&self, goal: &Goal) -> SmartSpendResult<Money> {
        Ok(self
            .storage
            .expenses
            .get_all()?
            .iter()
            .filter(|e| e.is_saving() && e.description == goal.name)
            .map(|e| e.amount)
            .sum())
    }

    /// Every goal paired with its progress and remaining amount
    pub fn goals_with_progress(&self) -> SmartSpendResult<Vec<GoalProgress>> {
        let goals = self.storage.goals.get_all()?;
        let expenses = self.storage.expenses.get_all()?;

        Ok(goals
            .into_iter()
            .map(|goal| {
                let progress = expenses
                    .iter()
                    .filter(|e| e.is_saving() && e.description == goal.name)
                    .map(|e| e.amount)
                    .sum();
                GoalProgress::new(goal, progress)
            })
            .collect())
    }

    /// Home dashboard rollup: rolling 7-day and current-month windows
    /// (both excluding `"saving"`), all-time savings, and the active goal
    pub fn dashboard(&self) -> SmartSpendResult<Dashboard> {
        let today = Local::now().date_naive();
        let week_start = today - Duration::days(7);
        let expenses = self.storage.expenses.get_all()?;

        let mut dashboard = Dashboard {
            income: self.storage.income.current()?,
            week_spent: Money::zero(),
            month_spent: Money::zero(),
            week_by_category: BTreeMap::new(),
            month_by_category: BTreeMap::new(),
            total_saved: Money::zero(),
            active_goal: self.storage.goals.active()?,
        };

        for expense in &expenses {
            if expense.is_saving() {
                dashboard.total_saved += expense.amount;
                continue;
            }
            if expense.date >= week_start {
                dashboard.week_spent += expense.amount;
                *dashboard
                    .week_by_category
                    .entry(expense.category.clone())
                    .or_insert(Money::zero()) += expense.amount;
            }
            if expense.date.year() == today.year() && expense.date.month() == today.month() {
                dashboard.month_spent += expense.amount;
                *dashboard
                    .month_by_category
                    .entry(expense.category.clone())
                    .or_insert(Money::zero()) += expense.amount;
            }
        }

        Ok(dashboard)
    }
}
