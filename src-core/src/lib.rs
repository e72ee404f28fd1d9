pub mod errors;
pub mod goals;
pub mod planner;
