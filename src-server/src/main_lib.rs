use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use wealthtrack_core::goals::{GoalService, MemoryGoalRepository};

use crate::api;

pub struct AppState {
    pub goal_service: GoalService<MemoryGoalRepository>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            goal_service: GoalService::new(Arc::new(MemoryGoalRepository::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the full application router with middleware applied.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", api::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
