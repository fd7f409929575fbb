pub mod assessment;
mod open_meteo;

pub use open_meteo::OpenMeteoClient;

use crate::error::{AppError, Result};
use crate::models::{PlanLocation, WeatherAssessment};
use async_trait::async_trait;

/// Source of classified current weather for a plan location.
#[async_trait]
pub trait WeatherService: Send + Sync {
    async fn assess(&self, location: &PlanLocation) -> Result<WeatherAssessment>;
}

/// Assess the weather at a stored plan's location.
///
/// A destination the geocoder cannot place is stored data, so it is reported
/// against `plan_id` instead of the `address` field the caller never sent.
pub async fn assess_plan_location(
    service: &dyn WeatherService,
    plan_id: i64,
    location: &PlanLocation,
) -> Result<WeatherAssessment> {
    service.assess(location).await.map_err(|err| match err {
        AppError::InvalidParameter { message, .. } => AppError::invalid(
            "plan_id",
            format!("destination of plan {} cannot be located: {}", plan_id, message),
        ),
        other => other,
    })
}
