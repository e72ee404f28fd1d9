use std::sync::Arc;

use axum::Router;

use crate::main_lib::AppState;

pub mod goals;
pub mod insights;
pub mod planner;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(goals::router())
        .merge(insights::router())
        .merge(planner::router())
}
