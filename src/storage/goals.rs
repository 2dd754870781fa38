//! Goal repository
//!
//! Handles persistence of savings goals. Activation is the one compound
//! mutation: deactivate-all-then-activate-one happens under a single
//! write lock and is persisted with a single atomic file write, so there
//! is never an observable state with zero or two active goals.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::Utc;

use crate::error::SmartSpendError;
use crate::models::{Goal, GoalId};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct GoalData {
    #[serde(default)]
    goals: Vec<Goal>,
}

/// Repository for savings goals
pub struct GoalRepository {
    path: PathBuf,
    goals: RwLock<HashMap<GoalId, Goal>>,
}

impl GoalRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            goals: RwLock::new(HashMap::new()),
        }
    }

    /// Load goals from disk
    pub fn load(&self) -> Result<(), SmartSpendError> {
        let file_data: GoalData = read_json(&self.path)?;

        let mut goals = self
            .goals
            .write()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        goals.clear();
        for goal in file_data.goals {
            goals.insert(goal.id, goal);
        }

        Ok(())
    }

    /// Save goals to disk
    pub fn save(&self) -> Result<(), SmartSpendError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = goals.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));

        let file_data = GoalData { goals: list };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a goal by ID
    pub fn get(&self, id: GoalId) -> Result<Option<Goal>, SmartSpendError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals.get(&id).cloned())
    }

    /// Get all goals, ordered by creation time
    pub fn get_all(&self) -> Result<Vec<Goal>, SmartSpendError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = goals.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(list)
    }

    /// The currently active goal, if any
    pub fn active(&self) -> Result<Option<Goal>, SmartSpendError> {
        let goals = self
            .goals
            .read()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(goals.values().find(|g| g.is_active).cloned())
    }

    /// Upsert a goal (insert or update)
    pub fn upsert(&self, goal: Goal) -> Result<(), SmartSpendError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        goals.insert(goal.id, goal);
        Ok(())
    }

    /// Delete a goal, returning the removed record if it existed
    pub fn delete(&self, id: GoalId) -> Result<Option<Goal>, SmartSpendError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(goals.remove(&id))
    }

    /// Make `id` the single active goal.
    ///
    /// Deactivates every other goal in the same locked mutation.
    pub fn set_active(&self, id: GoalId) -> Result<Goal, SmartSpendError> {
        let mut goals = self
            .goals
            .write()
            .map_err(|e| SmartSpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if !goals.contains_key(&id) {
            return Err(SmartSpendError::goal_not_found(id.to_string()));
        }

        let now = Utc::now();
        for goal in goals.values_mut() {
            let should_be_active = goal.id == id;
            if goal.is_active != should_be_active {
                goal.is_active = should_be_active;
                goal.updated_at = now;
            }
        }

        Ok(goals[&id].clone())
    }
}
