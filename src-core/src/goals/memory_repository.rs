use std::sync::RwLock;

use async_trait::async_trait;

use crate::errors::{Error, Result};
use crate::goals::goals_model::{Goal, GoalUpdate};
use crate::goals::goals_traits::GoalRepositoryTrait;

/// In-memory goal store. Goals keep insertion order, which is what the
/// aggregator's stable sorts tie-break on.
#[derive(Default)]
pub struct MemoryGoalRepository {
    goals: RwLock<Vec<Goal>>,
}

impl MemoryGoalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Goal>>> {
        self.goals
            .read()
            .map_err(|_| Error::Repository("goal store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Goal>>> {
        self.goals
            .write()
            .map_err(|_| Error::Repository("goal store lock poisoned".to_string()))
    }
}

#[async_trait]
impl GoalRepositoryTrait for MemoryGoalRepository {
    fn load_goals(&self) -> Result<Vec<Goal>> {
        Ok(self.read()?.clone())
    }

    fn find_goal(&self, goal_id: &str) -> Result<Option<Goal>> {
        Ok(self.read()?.iter().find(|g| g.id == goal_id).cloned())
    }

    async fn insert_new_goal(&self, goal: Goal) -> Result<Goal> {
        let mut goals = self.write()?;
        goals.push(goal.clone());
        Ok(goal)
    }

    async fn update_goal(&self, goal_id: &str, patch: GoalUpdate) -> Result<Goal> {
        let mut goals = self.write()?;
        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| Error::NotFound(goal_id.to_string()))?;
        goal.apply(patch);
        Ok(goal.clone())
    }

    async fn delete_goal(&self, goal_id: String) -> Result<usize> {
        let mut goals = self.write()?;
        let before = goals.len();
        goals.retain(|g| g.id != goal_id);
        let removed = before - goals.len();
        if removed == 0 {
            return Err(Error::NotFound(goal_id));
        }
        Ok(removed)
    }
}
