// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

use db::PlanStore;
use services::plan_b::PlanBEngine;
use services::route_planner::RoutePlanner;
use services::weather::WeatherService;
use std::sync::Arc;

// App state for sharing across the application
pub struct AppState {
    pub plan_store: Arc<dyn PlanStore>,
    pub weather_service: Arc<dyn WeatherService>,
    pub route_planner: RoutePlanner,
    pub plan_b_engine: PlanBEngine,
}
