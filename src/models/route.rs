use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::{ExerciseType, GeoPoint};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WaypointKind {
    Start,
    Waypoint,
    End,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
    pub order: u32,
    #[serde(rename = "type")]
    pub kind: WaypointKind,
}

impl Waypoint {
    pub fn new(point: GeoPoint, order: u32, kind: WaypointKind) -> Self {
        Waypoint {
            lat: point.lat,
            lng: point.lng,
            order,
            kind,
        }
    }

    pub fn point(&self) -> GeoPoint {
        GeoPoint {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// One synthetic closed loop. Lives only for the duration of a planning call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CandidateRoute {
    pub waypoints: Vec<Waypoint>,
    pub distance_m: f64,
    pub time_minutes: f64,
    pub calories_burn: f64,
    pub greenery_score: f64,
    pub intensity: f64,
}

/// A validated route-generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRequest {
    pub start: GeoPoint,
    pub target_calories: f64,
    pub max_time_minutes: u32,
    pub exercise_type: ExerciseType,
    pub weight_kg: f64,
}

impl RouteRequest {
    pub fn new(
        start: GeoPoint,
        target_calories: f64,
        max_time_minutes: u32,
        exercise_type: ExerciseType,
        weight_kg: f64,
    ) -> Result<Self> {
        if !target_calories.is_finite() || target_calories <= 0.0 {
            return Err(AppError::invalid(
                "target_calories",
                format!("must be greater than 0, got {}", target_calories),
            ));
        }
        if !(MIN_TIME_MINUTES..=MAX_TIME_MINUTES).contains(&max_time_minutes) {
            return Err(AppError::invalid(
                "max_time_minutes",
                format!(
                    "must be between {} and {}, got {}",
                    MIN_TIME_MINUTES, MAX_TIME_MINUTES, max_time_minutes
                ),
            ));
        }
        validate_weight(weight_kg)?;

        Ok(RouteRequest {
            start,
            target_calories,
            max_time_minutes,
            exercise_type,
            weight_kg,
        })
    }
}

pub fn validate_weight(weight_kg: f64) -> Result<()> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 || weight_kg > MAX_WEIGHT_KG {
        return Err(AppError::invalid(
            "weight_kg",
            format!("must be in (0, {}], got {}", MAX_WEIGHT_KG, weight_kg),
        ));
    }
    Ok(())
}

/// Which extremal rule picked a representative route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLabel {
    ShortestTime,
    MaxCalories,
    BestGreenery,
}

impl RouteLabel {
    /// Output order of the labels.
    pub const ORDER: [RouteLabel; 3] = [
        RouteLabel::ShortestTime,
        RouteLabel::MaxCalories,
        RouteLabel::BestGreenery,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            RouteLabel::ShortestTime => LABEL_SHORTEST_TIME,
            RouteLabel::MaxCalories => LABEL_MAX_CALORIES,
            RouteLabel::BestGreenery => LABEL_BEST_GREENERY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabeledRoute {
    pub route_id: u32,
    pub route_name: String,
    pub exercise_type: ExerciseType,
    #[serde(flatten)]
    pub route: CandidateRoute,
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct GenerateRoutesRequest {
    pub start_lat: f64,
    pub start_lng: f64,
    pub target_calories: f64,
    #[serde(default = "default_max_time_minutes")]
    pub max_time_minutes: u32,
    #[serde(default = "default_exercise_type")]
    pub exercise_type: String,
    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,
    #[serde(default)]
    pub n_routes: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_max_time_minutes() -> u32 {
    DEFAULT_MAX_TIME_MINUTES
}

fn default_exercise_type() -> String {
    ExerciseType::Walking.to_string()
}

fn default_weight_kg() -> f64 {
    DEFAULT_WEIGHT_KG
}

impl GenerateRoutesRequest {
    /// Validate every field and build the core request.
    /// Errors name the offending field.
    pub fn validate(&self) -> Result<RouteRequest> {
        if !(-90.0..=90.0).contains(&self.start_lat) {
            return Err(AppError::invalid(
                "start_lat",
                format!("must be between -90 and 90, got {}", self.start_lat),
            ));
        }
        if !(-180.0..=180.0).contains(&self.start_lng) {
            return Err(AppError::invalid(
                "start_lng",
                format!("must be between -180 and 180, got {}", self.start_lng),
            ));
        }
        let start = GeoPoint::new(self.start_lat, self.start_lng)
            .map_err(|e| AppError::invalid("start_lat", e))?;

        let exercise_type: ExerciseType = self
            .exercise_type
            .parse()
            .map_err(|e: String| AppError::invalid("exercise_type", e))?;

        if let Some(n) = self.n_routes {
            if !(MIN_N_ROUTES..=DEFAULT_N_ROUTES).contains(&n) {
                return Err(AppError::invalid(
                    "n_routes",
                    format!(
                        "must be between {} and {}, got {}",
                        MIN_N_ROUTES, DEFAULT_N_ROUTES, n
                    ),
                ));
            }
        }

        RouteRequest::new(
            start,
            self.target_calories,
            self.max_time_minutes,
            exercise_type,
            self.weight_kg,
        )
    }

    pub fn n_routes(&self) -> usize {
        self.n_routes.unwrap_or(DEFAULT_N_ROUTES)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlanResponse {
    pub routes: Vec<LabeledRoute>,
    pub start_point: GeoPoint,
    pub target_calories: f64,
    pub max_time_minutes: u32,
    pub exercise_type: ExerciseType,
    pub weight_kg: f64,
    /// Number of routes actually returned, which can fall short of the
    /// requested count when the candidates collapse to fewer distinct picks.
    pub n_routes: usize,
    pub seed: u64,
}

impl RoutePlanResponse {
    pub fn new(request: &RouteRequest, routes: Vec<LabeledRoute>, seed: u64) -> Self {
        Self {
            n_routes: routes.len(),
            routes,
            start_point: request.start,
            target_calories: request.target_calories,
            max_time_minutes: request.max_time_minutes,
            exercise_type: request.exercise_type,
            weight_kg: request.weight_kg,
            seed,
        }
    }
}
