pub mod coordinates;
pub mod exercise;
pub mod plan;
pub mod route;
pub mod weather;

pub use coordinates::GeoPoint;
pub use exercise::{ExerciseType, IndoorExercise, INDOOR_CATALOG};
pub use plan::{PlanBAlternative, PlanBOutcome, PlanBResponse, PlanLocation, PlanTotals};
pub use route::{CandidateRoute, LabeledRoute, RouteLabel, RouteRequest, Waypoint, WaypointKind};
pub use weather::{CurrentWeather, Severity, WeatherAssessment};
