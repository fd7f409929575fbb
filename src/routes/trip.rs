use crate::error::Result;
use crate::models::route::{GenerateRoutesRequest, RoutePlanResponse};
use crate::models::PlanBResponse;
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

/// POST /trip/routes
/// Generate labeled loop routes that meet a calorie target within a time budget
pub async fn generate_routes(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GenerateRoutesRequest>,
) -> Result<Json<RoutePlanResponse>> {
    let response = state.route_planner.plan(&request)?;
    Ok(Json(response))
}

/// GET /trip/plan-b/{plan_id}
/// Indoor substitutes for a stored plan when the weather is bad
pub async fn plan_b(
    State(state): State<Arc<AppState>>,
    Path(plan_id): Path<i64>,
) -> Result<Json<PlanBResponse>> {
    tracing::info!(plan_id, "Plan B request");

    let response = state
        .plan_b_engine
        .evaluate_plan_b(
            plan_id,
            state.plan_store.as_ref(),
            state.weather_service.as_ref(),
        )
        .await?;

    Ok(Json(response))
}
