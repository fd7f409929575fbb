use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health - Check if services are working
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let mut status = json!({
        "status": "ok",
        "checks": {}
    });

    let backend = state.plan_store.backend_name();
    if state.plan_store.health_check().await {
        status["checks"]["plan_store"] = json!({"backend": backend, "status": "ok"});
    } else {
        status["checks"]["plan_store"] = json!({"backend": backend, "status": "error"});
        status["status"] = json!("error");
    }

    Json(status)
}
