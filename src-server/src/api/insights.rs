use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use wealthtrack_core::goals::summary::{top_by_target, GoalChartSlice};
use wealthtrack_core::goals::{GoalAggregate, GoalServiceTrait};
use wealthtrack_core::planner::{invested_value_trend, recommend, ProjectionSeries, Recommendation};

use crate::{error::ApiResult, main_lib::AppState};

async fn summary(State(state): State<Arc<AppState>>) -> ApiResult<Json<GoalAggregate>> {
    Ok(Json(state.goal_service.summary()?))
}

#[derive(Deserialize)]
struct TopGoalsQuery {
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    6
}

async fn top_goals(
    Query(query): Query<TopGoalsQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<GoalChartSlice>>> {
    let goals = state.goal_service.get_goals()?;
    Ok(Json(top_by_target(&goals, query.limit)))
}

/// Decorative dashboard curve; the payload carries `illustrative: true` so
/// clients cannot mistake it for a projection.
async fn trend(State(state): State<Arc<AppState>>) -> ApiResult<Json<ProjectionSeries>> {
    let aggregate = state.goal_service.summary()?;
    Ok(Json(invested_value_trend(aggregate.total_saved)))
}

async fn recommendations(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Recommendation>>> {
    let goals = state.goal_service.get_goals()?;
    Ok(Json(recommend(&goals)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/insights/summary", get(summary))
        .route("/insights/top-goals", get(top_goals))
        .route("/insights/trend", get(trend))
        .route("/insights/recommendations", get(recommendations))
}
