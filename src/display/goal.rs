//! Goal display formatting

use crate::models::GoalProgress;

/// Format a single goal with its progress
pub fn format_goal_row(progress: &GoalProgress) -> String {
    let marker = if progress.goal.is_active { "*" } else { " " };
    format!(
        "{} {:<20} {:>12} {:>12} {:>12}",
        marker,
        truncate(&progress.goal.name, 20),
        progress.goal.target_amount.to_string(),
        progress.progress.to_string(),
        progress.remaining.to_string()
    )
}

/// Format the goal list with progress columns
pub fn format_goal_list(goals: &[GoalProgress]) -> String {
    if goals.is_empty() {
        return "No goals yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<20} {:>12} {:>12} {:>12}\n",
        "Goal", "Target", "Saved", "Remaining"
    ));
    output.push_str(&"-".repeat(62));
    output.push('\n');

    for progress in goals {
        output.push_str(&format_goal_row(progress));
        output.push('\n');
    }

    output.push_str("\n* = active goal\n");
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
    use crate::models::{Goal, Money};

    #[test]
    fn test_empty_list() {
        assert_eq!(format_goal_list(&[]), "No goals yet.\n");
    }

    #[test]
    fn test_active_goal_is_marked() {
        let mut goal = Goal::new("Trip", Money::from_cents(10000));
        goal.is_active = true;
        let progress = GoalProgress::new(goal, Money::from_cents(2000));

        let row = format_goal_row(&progress);
        assert!(row.starts_with('*'));
        assert!(row.contains("$100.00"));
        assert!(row.contains("$20.00"));
        assert!(row.contains("$80.00"));
    }

    #[test]
    fn test_long_names_truncated() {
        let goal = Goal::new(
            "a goal with an unreasonably long name",
            Money::from_cents(100),
        );
        let progress = GoalProgress::new(goal, Money::zero());
        let row = format_goal_row(&progress);
        assert!(row.contains('…'));
    }
}
