use crate::models::{ExerciseType, GeoPoint, WeatherAssessment};
use serde::{Deserialize, Serialize};

/// Where a stored plan takes place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum PlanLocation {
    Coordinates(GeoPoint),
    Address(String),
}

/// Aggregate figures read from the plan store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanTotals {
    pub plan_id: i64,
    pub original_calories: f64,
    pub location: PlanLocation,
    /// Plan owner's body weight, when recorded.
    pub weight_kg: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanBAlternative {
    pub exercise_name: String,
    pub exercise_type: ExerciseType,
    pub duration_minutes: u32,
    pub calories: f64,
    pub is_indoor: bool,
    pub mets_value: f64,
    pub description: String,
}

/// Substitution result for a given calorie target and weather.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanBOutcome {
    pub need_plan_b: bool,
    pub alternatives: Vec<PlanBAlternative>,
    pub plan_b_total_calories: f64,
    /// Calories the indoor plan could not cover; 0 when within tolerance.
    pub shortfall_calories: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanBResponse {
    pub plan_id: i64,
    pub weather: WeatherAssessment,
    pub need_plan_b: bool,
    pub original_calories: f64,
    pub alternatives: Vec<PlanBAlternative>,
    pub plan_b_total_calories: f64,
    pub shortfall_calories: f64,
    pub reason: String,
}

impl PlanBResponse {
    pub fn new(totals: &PlanTotals, weather: WeatherAssessment, outcome: PlanBOutcome) -> Self {
        PlanBResponse {
            plan_id: totals.plan_id,
            weather,
            need_plan_b: outcome.need_plan_b,
            original_calories: totals.original_calories,
            alternatives: outcome.alternatives,
            plan_b_total_calories: outcome.plan_b_total_calories,
            shortfall_calories: outcome.shortfall_calories,
            reason: outcome.reason,
        }
    }
}
