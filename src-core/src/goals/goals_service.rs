use crate::errors::{Error, Result, ValidationError};
use crate::goals::goals_model::{Goal, GoalProgressSnapshot, GoalUpdate, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::goals::summary::{self, GoalAggregate};
use crate::planner::recommendation::{recommend, Recommendation};
use async_trait::async_trait;
use std::sync::Arc;

pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }

    fn require_goal(&self, goal_id: &str) -> Result<Goal> {
        self.goal_repo
            .find_goal(goal_id)?
            .ok_or_else(|| Error::NotFound(goal_id.to_string()))
    }
}

#[async_trait]
impl<T: GoalRepositoryTrait> GoalServiceTrait for GoalService<T> {
    fn get_goals(&self) -> Result<Vec<Goal>> {
        self.goal_repo.load_goals()
    }

    fn goal_progress(&self, goal_id: &str) -> Result<GoalProgressSnapshot> {
        let goal = self.require_goal(goal_id)?;
        Ok(GoalProgressSnapshot::of(&goal))
    }

    fn summary(&self) -> Result<GoalAggregate> {
        let goals = self.goal_repo.load_goals()?;
        Ok(summary::summarize(&goals))
    }

    fn recommendations(&self) -> Result<Vec<Recommendation>> {
        let goals = self.goal_repo.load_goals()?;
        Ok(recommend(&goals))
    }

    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal> {
        if new_goal.title.trim().is_empty() {
            return Err(
                ValidationError::InvalidInput("Goal title must not be empty".to_string()).into(),
            );
        }
        let goal = new_goal.normalized();
        log::debug!("creating goal '{}' ({})", goal.title, goal.id);
        self.goal_repo.insert_new_goal(goal).await
    }

    async fn update_goal(&self, goal_id: &str, patch: GoalUpdate) -> Result<Goal> {
        if let Some(title) = &patch.title {
            if title.trim().is_empty() {
                return Err(ValidationError::InvalidInput(
                    "Goal title must not be empty".to_string(),
                )
                .into());
            }
        }
        self.goal_repo.update_goal(goal_id, patch).await
    }

    async fn delete_goal(&self, goal_id: String) -> Result<usize> {
        self.goal_repo.delete_goal(goal_id).await
    }

    async fn add_money(&self, goal_id: &str, amount: f64) -> Result<Goal> {
        if !amount.is_finite() {
            return Err(
                ValidationError::InvalidInput("Amount must be a finite number".to_string()).into(),
            );
        }
        let goal = self.require_goal(goal_id)?;
        // Deltas may be negative (corrections); the saved amount itself
        // never leaves [0, target].
        let next_saved = (goal.saved_amount + amount).max(0.0);
        let patch = GoalUpdate {
            saved_amount: Some(next_saved),
            ..GoalUpdate::default()
        };
        self.goal_repo.update_goal(goal_id, patch).await
    }
}
