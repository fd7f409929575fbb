use crate::error::{AppError, Result};
use crate::models::{PlanLocation, WeatherAssessment};
use crate::services::weather::assess_plan_location;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct AddressQuery {
    #[serde(default)]
    pub address: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeatherResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<i64>,
    pub location: PlanLocation,
    pub weather: WeatherAssessment,
}

/// GET /weather/by-plan/{plan_id}
/// Current weather at a stored plan's coordinates, or its destination if it has none
pub async fn by_plan(
    State(state): State<Arc<AppState>>,
    Path(plan_id): Path<i64>,
) -> Result<Json<WeatherResponse>> {
    let totals = state.plan_store.get_totals(plan_id).await?;
    let weather =
        assess_plan_location(state.weather_service.as_ref(), plan_id, &totals.location).await?;

    Ok(Json(WeatherResponse {
        plan_id: Some(plan_id),
        location: totals.location,
        weather,
    }))
}

/// GET /weather/by-address?address=...
pub async fn by_address(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AddressQuery>,
) -> Result<Json<WeatherResponse>> {
    let address = query.address.trim();
    if address.is_empty() {
        return Err(AppError::invalid("address", "must not be empty"));
    }

    let location = PlanLocation::Address(address.to_string());
    let weather = state.weather_service.assess(&location).await?;

    Ok(Json(WeatherResponse {
        plan_id: None,
        location,
        weather,
    }))
}
