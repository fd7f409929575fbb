use crate::constants::DEFAULT_WEIGHT_KG;
use crate::error::{AppError, Result};
use crate::models::route::validate_weight;
use crate::models::{ExerciseType, INDOOR_CATALOG};
use crate::services::energy;
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseInfo {
    pub exercise_type: ExerciseType,
    pub name_cn: String,
    pub name_en: String,
    pub mets: f64,
    pub description: String,
    pub indoor: bool,
    /// Nominal speed when the exercise can follow a generated route
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_speed_kmh: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExerciseTypesResponse {
    pub exercises: Vec<ExerciseInfo>,
}

/// GET /exercise/types
pub async fn list_types(State(state): State<Arc<AppState>>) -> Json<ExerciseTypesResponse> {
    let speeds = state.route_planner.speeds();

    let exercises = ExerciseType::all()
        .map(|exercise| {
            let entry = exercise.catalog_entry();
            ExerciseInfo {
                exercise_type: exercise,
                name_cn: entry.name_cn.to_string(),
                name_en: entry.name_en.to_string(),
                mets: entry.mets,
                description: entry.description.to_string(),
                indoor: INDOOR_CATALOG.iter().any(|i| i.exercise == exercise),
                route_speed_kmh: speeds.speed_kmh(exercise),
            }
        })
        .collect();

    Json(ExerciseTypesResponse { exercises })
}

#[derive(Debug, Deserialize)]
pub struct CaloriesQuery {
    pub exercise_type: String,
    pub duration_minutes: f64,
    pub weight_kg: Option<f64>,
    pub intensity: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CaloriesResponse {
    pub exercise_type: ExerciseType,
    pub duration_minutes: f64,
    pub weight_kg: f64,
    pub intensity: f64,
    pub mets: f64,
    pub calories: f64,
}

/// GET /exercise/calories?exercise_type=..&duration_minutes=..[&weight_kg=..][&intensity=..]
pub async fn calories(Query(query): Query<CaloriesQuery>) -> Result<Json<CaloriesResponse>> {
    let exercise: ExerciseType = query
        .exercise_type
        .parse()
        .map_err(|e: String| AppError::invalid("exercise_type", e))?;
    let weight_kg = query.weight_kg.unwrap_or(DEFAULT_WEIGHT_KG);
    validate_weight(weight_kg)?;
    let intensity = query.intensity.unwrap_or(1.0);

    let calories = energy::calories(exercise, query.duration_minutes, weight_kg, intensity)?;

    Ok(Json(CaloriesResponse {
        exercise_type: exercise,
        duration_minutes: query.duration_minutes,
        weight_kg,
        intensity,
        mets: exercise.mets(),
        calories,
    }))
}
