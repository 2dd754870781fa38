//! Dashboard display formatting

use crate::services::Dashboard;

/// Format the home dashboard for terminal display
pub fn format_dashboard(dashboard: &Dashboard) -> String {
    let mut output = String::new();

    output.push_str("Income\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    match &dashboard.income {
        Some(income) => {
            output.push_str(&format!("  Yearly:  {}\n", income.yearly));
            output.push_str(&format!("  Monthly: {}\n", income.monthly()));
            output.push_str(&format!("  Weekly:  {}\n", income.weekly()));
        }
        None => output.push_str("  (no income recorded)\n"),
    }

    output.push_str("\nSpending\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!("  Last 7 days:   {}\n", dashboard.week_spent));
    output.push_str(&format!("  This month:    {}\n", dashboard.month_spent));

    if !dashboard.week_by_category.is_empty() {
        output.push_str("\n  Last 7 days by category:\n");
        for (category, total) in &dashboard.week_by_category {
            output.push_str(&format!("    {:<20} {:>10}\n", category, total.to_string()));
        }
    }
    if !dashboard.month_by_category.is_empty() {
        output.push_str("\n  This month by category:\n");
        for (category, total) in &dashboard.month_by_category {
            output.push_str(&format!("    {:<20} {:>10}\n", category, total.to_string()));
        }
    }

    output.push_str("\nSaving\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!("  Total saved:   {}\n", dashboard.total_saved));
    match &dashboard.active_goal {
        Some(goal) => {
            output.push_str(&format!(
                "  Active goal:   {} (target {})\n",
                goal.name, goal.target_amount
            ));
            output.push_str(&format!("  Progress:      {}%\n", dashboard.saving_percent()));
        }
        None => output.push_str("  Active goal:   (none)\n"),
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Income, Money};
    use std::collections::BTreeMap;

    #[test]
    fn test_format_dashboard_without_data() {
        let dashboard = Dashboard {
            income: None,
            week_spent: Money::zero(),
            month_spent: Money::zero(),
            week_by_category: BTreeMap::new(),
            month_by_category: BTreeMap::new(),
            total_saved: Money::zero(),
            active_goal: None,
        };

        let rendered = format_dashboard(&dashboard);
        assert!(rendered.contains("(no income recorded)"));
        assert!(rendered.contains("Active goal:   (none)"));
    }

    #[test]
    fn test_format_dashboard_with_income() {
        let dashboard = Dashboard {
            income: Some(Income::new(Money::from_cents(5_200_000))),
            week_spent: Money::from_cents(1500),
            month_spent: Money::from_cents(4200),
            week_by_category: BTreeMap::new(),
            month_by_category: BTreeMap::new(),
            total_saved: Money::from_cents(700),
            active_goal: None,
        };

        let rendered = format_dashboard(&dashboard);
        assert!(rendered.contains("Yearly:  $52000.00"));
        assert!(rendered.contains("Weekly:  $1000.00"));
        assert!(rendered.contains("Last 7 days:   $15.00"));
    }
}
