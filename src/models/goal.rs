//! Savings goal model
//!
//! Goals are linked to their contribution records by name: a `"saving"`
//! expense counts toward the goal whose name equals the expense
//! description exactly (case-sensitive). At most one goal is active at a
//! time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// A savings goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal name; also the join key for contribution records
    pub name: String,

    /// Amount to save toward
    pub target_amount: Money,

    /// Whether this is the goal currently tracked for progress display.
    /// At most one goal is active at any time.
    #[serde(default)]
    pub is_active: bool,

    /// When the goal was created
    pub created_at: DateTime<Utc>,

    /// When the goal was last modified
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    /// Create a new (inactive) goal
    pub fn new(name: impl Into<String>, target_amount: Money) -> Self {
        let now = Utc::now();
        Self {
            id: GoalId::new(),
            name: name.into(),
            target_amount,
            is_active: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Update name and target, bumping the modification stamp.
    ///
    /// Renaming orphans any contributions recorded under the old name;
    /// the name is the join key.
    pub fn update(&mut self, name: impl Into<String>, target_amount: Money) {
        self.name = name.into();
        self.target_amount = target_amount;
        self.updated_at = Utc::now();
    }

    /// Validate the goal's fields
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target_amount.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget(self.target_amount));
        }
        Ok(())
    }
}

/// A goal together with its computed contribution totals
#[derive(Debug, Clone)]
pub struct GoalProgress {
    pub goal: Goal,
    /// Sum of contributions recorded under the goal's name
    pub progress: Money,
    /// Target minus progress, clamped at zero
    pub remaining: Money,
}

impl GoalProgress {
    /// Pair a goal with its contribution total
    pub fn new(goal: Goal, progress: Money) -> Self {
        let remaining = goal.target_amount - progress;
        let remaining = if remaining.is_negative() {
            Money::zero()
        } else {
            remaining
        };
        Self {
            goal,
            progress,
            remaining,
        }
    }
}

/// Error type for goal validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget(Money),
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "goal name must not be empty"),
            Self::NonPositiveTarget(amount) => {
                write!(f, "goal target must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_goal_is_inactive() {
        let goal = Goal::new("Trip", Money::from_cents(10000));
        assert!(!goal.is_active);
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let unnamed = Goal::new("  ", Money::from_cents(10000));
        assert_eq!(unnamed.validate(), Err(GoalValidationError::EmptyName));

        let zero_target = Goal::new("Trip", Money::zero());
        assert!(matches!(
            zero_target.validate(),
            Err(GoalValidationError::NonPositiveTarget(_))
        ));
    }

    #[test]
    fn test_progress_remaining_clamped() {
        let goal = Goal::new("Trip", Money::from_cents(10000));

        let partial = GoalProgress::new(goal.clone(), Money::from_cents(2000));
        assert_eq!(partial.remaining.cents(), 8000);

        let overshot = GoalProgress::new(goal, Money::from_cents(15000));
        assert_eq!(overshot.remaining, Money::zero());
    }
}
