use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch, post},
    Json, Router,
};
use serde::Deserialize;

use wealthtrack_core::goals::{Goal, GoalProgressSnapshot, GoalServiceTrait, GoalUpdate, NewGoal};

use crate::{error::ApiResult, main_lib::AppState};

async fn list_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.get_goals()?;
    Ok(Json(goals))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(new_goal): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let goal = state.goal_service.create_goal(new_goal).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(patch): Json<GoalUpdate>,
) -> ApiResult<Json<Goal>> {
    let goal = state.goal_service.update_goal(&id, patch).await?;
    Ok(Json(goal))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.goal_service.delete_goal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
struct AddMoneyRequest {
    amount: f64,
}

async fn add_money(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddMoneyRequest>,
) -> ApiResult<Json<Goal>> {
    let goal = state.goal_service.add_money(&id, req.amount).await?;
    Ok(Json(goal))
}

async fn goal_progress(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<GoalProgressSnapshot>> {
    let snapshot = state.goal_service.goal_progress(&id)?;
    Ok(Json(snapshot))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(list_goals).post(create_goal))
        .route("/goals/:id", patch(update_goal).delete(delete_goal))
        .route("/goals/:id/add-money", post(add_money))
        .route("/goals/:id/progress", get(goal_progress))
}
