pub mod goals_model;
pub mod goals_service;
pub mod goals_traits;
pub mod memory_repository;
pub mod summary;

pub use goals_model::{Goal, GoalProgressSnapshot, GoalUpdate, NewGoal};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
pub use memory_repository::MemoryGoalRepository;
pub use summary::GoalAggregate;
