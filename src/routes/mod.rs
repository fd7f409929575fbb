pub mod debug;
pub mod exercise;
pub mod trip;
pub mod weather;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/trip/routes", post(trip::generate_routes))
        .route("/trip/plan-b/{plan_id}", get(trip::plan_b))
        .route("/weather/by-plan/{plan_id}", get(weather::by_plan))
        .route("/weather/by-address", get(weather::by_address))
        .route("/exercise/types", get(exercise::list_types))
        .route("/exercise/calories", get(exercise::calories))
        .route("/debug/health", get(debug::health_check))
        .with_state(state)
}
