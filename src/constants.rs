//! Stable application-wide constants.
//!
//! Values here are request bounds, algorithm coefficients, and default
//! fallbacks for env-var-based configuration. They should rarely change.
//! For tuning knobs that benefit from runtime experimentation, see
//! [`PlannerConfig`](crate::config::PlannerConfig) and
//! [`PlanBConfig`](crate::config::PlanBConfig) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Request bounds and defaults ---

/// Body weight assumed when neither the request nor the plan owner supplies one.
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;
/// Upper bound (inclusive) on accepted body weight.
pub const MAX_WEIGHT_KG: f64 = 500.0;
/// Default exercise time budget for route generation.
pub const DEFAULT_MAX_TIME_MINUTES: u32 = 60;
/// Smallest accepted time budget.
pub const MIN_TIME_MINUTES: u32 = 1;
/// Largest accepted time budget.
pub const MAX_TIME_MINUTES: u32 = 240;
/// Number of labeled routes returned unless the caller asks for fewer.
pub const DEFAULT_N_ROUTES: usize = 3;
/// Lower bound on `n_routes` a caller may request.
pub const MIN_N_ROUTES: usize = 2;

// --- Route labels (wire contract, consumers key off these literals) ---

pub const LABEL_SHORTEST_TIME: &str = "最短时间";
pub const LABEL_MAX_CALORIES: &str = "最大消耗";
pub const LABEL_BEST_GREENERY: &str = "最佳绿化";

// --- Energy model bounds ---

/// Lowest effort multiplier applied on top of catalog METs.
pub const MIN_INTENSITY: f64 = 0.5;
/// Highest effort multiplier applied on top of catalog METs.
pub const MAX_INTENSITY: f64 = 1.5;

// --- Loop geometry ---

/// Mean earth radius used by the spherical distance and offset formulas.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
/// Per-vertex radius jitter range (±15%).
pub const RADIUS_JITTER_RANGE: f64 = 0.15;
/// Fewest loop vertices, start included.
pub const MIN_LOOP_VERTICES: usize = 3;
/// Most loop vertices, start included.
pub const MAX_LOOP_VERTICES: usize = 6;
/// Shortest sampled duration as a fraction of the time budget.
pub const MIN_DURATION_FRACTION: f64 = 0.25;
/// Radius rescaling passes used to fit the anchor loop to its planned duration.
pub const ANCHOR_FIT_PASSES: usize = 4;
/// Safety margin applied when an anchor loop has to be shrunk under the budget.
pub const ANCHOR_BUDGET_MARGIN: f64 = 0.9999;
/// Extra duration planned for the anchor loop so a fitted loop still reaches the target.
pub const ANCHOR_DURATION_HEADROOM: f64 = 1.01;

// --- Planner defaults (used when env vars are absent) ---

pub const DEFAULT_POPULATION_SIZE: usize = 40;
pub const DEFAULT_GREENERY_SKEW: f64 = 2.0;
pub const DEFAULT_MAX_RESAMPLE_ATTEMPTS: usize = 25;

// --- Nominal travel speeds (km/h) ---

pub const DEFAULT_SPEED_WALKING_KMH: f64 = 5.0;
pub const DEFAULT_SPEED_BRISK_WALKING_KMH: f64 = 6.0;
pub const DEFAULT_SPEED_HIKING_KMH: f64 = 4.0;
pub const DEFAULT_SPEED_JOGGING_KMH: f64 = 7.5;
pub const DEFAULT_SPEED_RUNNING_KMH: f64 = 9.0;
pub const DEFAULT_SPEED_CYCLING_KMH: f64 = 18.0;

// --- Plan-B defaults ---

pub const DEFAULT_PLAN_B_MAX_ITEM_MINUTES: u32 = 60;
pub const DEFAULT_PLAN_B_MIN_ITEM_MINUTES: u32 = 5;
pub const DEFAULT_PLAN_B_MAX_ITEMS: usize = 4;
/// Accepted gap as a fraction of the original calorie total.
pub const DEFAULT_PLAN_B_TOLERANCE_RATIO: f64 = 0.05;
/// Accepted gap floor in kcal, applies when 5% would be smaller.
pub const DEFAULT_PLAN_B_TOLERANCE_FLOOR_KCAL: f64 = 10.0;

// --- Weather collaborator ---

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_GEOCODING_BASE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
/// Weather assessments are reused for 10 minutes per rounded location.
pub const DEFAULT_WEATHER_CACHE_TTL_SECONDS: u64 = 600;
pub const DEFAULT_WEATHER_TIMEOUT_SECONDS: u64 = 10;
/// Maximum cached weather locations.
pub const DEFAULT_WEATHER_CACHE_MAX_ENTRIES: u64 = 1_000;
/// Coordinate precision (decimal places, ~1km) used for weather cache keys.
pub const WEATHER_CACHE_COORD_PRECISION: u32 = 2;

/// At or below this temperature (°C) outdoor exercise is severe-rated.
pub const EXTREME_COLD_THRESHOLD_C: f64 = -10.0;
/// At or above this temperature (°C) outdoor exercise is severe-rated.
pub const EXTREME_HEAT_THRESHOLD_C: f64 = 38.0;
/// At or above this wind speed (km/h) outdoor exercise is at least moderate-rated.
pub const HIGH_WIND_THRESHOLD_KMH: f64 = 50.0;
