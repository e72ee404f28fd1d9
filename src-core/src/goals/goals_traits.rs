use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalProgressSnapshot, GoalUpdate, NewGoal};
use crate::goals::summary::GoalAggregate;
use crate::planner::recommendation::Recommendation;
use async_trait::async_trait;

/// Storage seam for goals. Both the editing views and the reporting views
/// read through this single source of truth; there is no side-channel
/// mirror between them.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
    fn find_goal(&self, goal_id: &str) -> Result<Option<Goal>>;
    async fn insert_new_goal(&self, goal: Goal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: &str, patch: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: String) -> Result<usize>;
}

/// Consumer seam exposed to the presentation layers.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<Goal>>;
    fn goal_progress(&self, goal_id: &str) -> Result<GoalProgressSnapshot>;
    fn summary(&self) -> Result<GoalAggregate>;
    fn recommendations(&self) -> Result<Vec<Recommendation>>;
    async fn create_goal(&self, new_goal: NewGoal) -> Result<Goal>;
    async fn update_goal(&self, goal_id: &str, patch: GoalUpdate) -> Result<Goal>;
    async fn delete_goal(&self, goal_id: String) -> Result<usize>;
    async fn add_money(&self, goal_id: &str, amount: f64) -> Result<Goal>;
}
