//! Goal service
//!
//! Provides business logic for managing savings goals: creation,
//! editing, deletion, and activation. At most one goal is active at a
//! time; activation swaps the flag atomically.

use crate::config::settings::Settings;
use crate::error::{SmartSpendError, SmartSpendResult};
use crate::models::{Goal, GoalId};
use crate::storage::Storage;

use super::expense::parse_amount;

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// Create a new goal (inactive until explicitly activated)
    pub fn add_goal(&self, name: &str, target: &str) -> SmartSpendResult<Goal> {
        let target = parse_amount(target, self.settings.max_expense_amount)?;

        let goal = Goal::new(name.trim(), target);
        goal.validate()
            .map_err(|e| SmartSpendError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        Ok(goal)
    }

    /// Update a goal's name and target.
    ///
    /// Contributions are joined by name, so a rename leaves previously
    /// recorded contributions behind under the old name.
    pub fn update_goal(&self, id: GoalId, name: &str, target: &str) -> SmartSpendResult<Goal> {
        let target = parse_amount(target, self.settings.max_expense_amount)?;

        let mut goal = self
            .storage
            .goals
            .get(id)?
            .ok_or_else(|| SmartSpendError::goal_not_found(id.to_string()))?;

        goal.update(name.trim(), target);
        goal.validate()
            .map_err(|e| SmartSpendError::Validation(e.to_string()))?;

        self.storage.goals.upsert(goal.clone())?;
        self.storage.goals.save()?;

        Ok(goal)
    }

    /// Delete a goal
    pub fn delete_goal(&self, id: GoalId) -> SmartSpendResult<Goal> {
        let removed = self
            .storage
            .goals
            .delete(id)?
            .ok_or_else(|| SmartSpendError::goal_not_found(id.to_string()))?;

        self.storage.goals.save()?;
        Ok(removed)
    }

    /// Make `id` the single active goal, deactivating all others as one
    /// operation
    pub fn activate(&self, id: GoalId) -> SmartSpendResult<Goal> {
        let activated = self.storage.goals.set_active(id)?;
        self.storage.goals.save()?;
        Ok(activated)
    }

    /// The currently active goal, if any
    pub fn active(&self) -> SmartSpendResult<Option<Goal>> {
        self.storage.goals.active()
    }

    /// All goals, oldest first
    pub fn list(&self) -> SmartSpendResult<Vec<Goal>> {
        self.storage.goals.get_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SmartSpendPaths;
    use tempfile::TempDir;

    fn setup() -> (TempDir, Storage, Settings) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SmartSpendPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage, Settings::default())
    }

    #[test]
    fn test_add_goal_starts_inactive() {
        let (_temp, storage, settings) = setup();
        let service = GoalService::new(&storage, &settings);

        let goal = service.add_goal("Trip", "100").unwrap();
        assert!(!goal.is_active);
        assert!(service.active().unwrap().is_none());
    }

    #[test]
    fn test_activation_swaps_exactly_one_active() {
        let (_temp, storage, settings) = setup();
        let service = GoalService::new(&storage, &settings);

        let a = service.add_goal("A", "100").unwrap();
        let b = service.add_goal("B", "200").unwrap();

        service.activate(a.id).unwrap();
        assert_eq!(service.active().unwrap().unwrap().id, a.id);

        service.activate(b.id).unwrap();
        let goals = service.list().unwrap();
        let active: Vec<_> = goals.iter().filter(|g| g.is_active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, b.id);
    }

    #[test]
    fn test_invalid_target_rejected() {
        let (_temp, storage, settings) = setup();
        let service = GoalService::new(&storage, &settings);

        assert!(service.add_goal("Trip", "0").unwrap_err().is_invalid_amount());
        assert!(service
            .add_goal("Trip", "nope")
            .unwrap_err()
            .is_invalid_amount());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_update_and_delete() {
        let (_temp, storage, settings) = setup();
        let service = GoalService::new(&storage, &settings);

        let goal = service.add_goal("Trip", "100").unwrap();
        let updated = service.update_goal(goal.id, "Big Trip", "250").unwrap();
        assert_eq!(updated.name, "Big Trip");
        assert_eq!(updated.target_amount.cents(), 25000);
        assert!(updated.updated_at >= goal.updated_at);

        service.delete_goal(goal.id).unwrap();
        assert!(service.delete_goal(goal.id).unwrap_err().is_not_found());
    }
}
