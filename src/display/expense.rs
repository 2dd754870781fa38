//! Expense display formatting
//!
//! Register-style listings of expense records for the terminal.

use crate::models::Expense;

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense) -> String {
    let description = if expense.description.is_empty() {
        "(no description)".to_string()
    } else {
        expense.description.clone()
    };

    format!(
        "{} {:<12} {:<20} {:<16} {:>12}",
        expense.id,
        expense.date.format("%Y-%m-%d"),
        truncate(&description, 20),
        truncate(&expense.category, 16),
        expense.amount.to_string()
    )
}

/// Format a list of expenses as a register
pub fn format_expense_register(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<12} {:<12} {:<20} {:<16} {:>12}\n",
        "ID", "Date", "Description", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum display width
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_register() {
        assert_eq!(format_expense_register(&[]), "No expenses found.\n");
    }

    #[test]
    fn test_register_rows() {
        let expense = Expense::new(
            Money::from_cents(1250),
            NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            "weekly shop",
            "Groceries",
        );

        let rendered = format_expense_register(&[expense]);
        assert!(rendered.contains("2025-07-01"));
        assert!(rendered.contains("weekly shop"));
        assert!(rendered.contains("$12.50"));
    }
}
