use crate::constants::*;
use crate::models::ExerciseType;
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Optional: without it plans live in an in-memory store.
    pub database_url: Option<String>,
    pub weather: WeatherConfig,
    pub planner: PlannerConfig,
    pub plan_b: PlanBConfig,
}

#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub forecast_base_url: String,
    pub geocoding_base_url: String,
    pub cache_ttl_seconds: u64,
    pub timeout_seconds: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: DEFAULT_WEATHER_BASE_URL.to_string(),
            geocoding_base_url: DEFAULT_GEOCODING_BASE_URL.to_string(),
            cache_ttl_seconds: DEFAULT_WEATHER_CACHE_TTL_SECONDS,
            timeout_seconds: DEFAULT_WEATHER_TIMEOUT_SECONDS,
        }
    }
}

/// Nominal travel speeds (km/h) for exercises that can follow a route.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedTable {
    pub walking_kmh: f64,
    pub brisk_walking_kmh: f64,
    pub hiking_kmh: f64,
    pub jogging_kmh: f64,
    pub running_kmh: f64,
    pub cycling_kmh: f64,
}

impl Default for SpeedTable {
    fn default() -> Self {
        Self {
            walking_kmh: DEFAULT_SPEED_WALKING_KMH,
            brisk_walking_kmh: DEFAULT_SPEED_BRISK_WALKING_KMH,
            hiking_kmh: DEFAULT_SPEED_HIKING_KMH,
            jogging_kmh: DEFAULT_SPEED_JOGGING_KMH,
            running_kmh: DEFAULT_SPEED_RUNNING_KMH,
            cycling_kmh: DEFAULT_SPEED_CYCLING_KMH,
        }
    }
}

impl SpeedTable {
    /// `None` for exercises that do not travel along a route.
    pub fn speed_kmh(&self, exercise: ExerciseType) -> Option<f64> {
        match exercise {
            ExerciseType::Walking => Some(self.walking_kmh),
            ExerciseType::BriskWalking => Some(self.brisk_walking_kmh),
            ExerciseType::Hiking => Some(self.hiking_kmh),
            ExerciseType::Jogging => Some(self.jogging_kmh),
            ExerciseType::Running => Some(self.running_kmh),
            ExerciseType::Cycling => Some(self.cycling_kmh),
            _ => None,
        }
    }

    fn all(&self) -> [(&'static str, f64); 6] {
        [
            ("SPEED_WALKING_KMH", self.walking_kmh),
            ("SPEED_BRISK_WALKING_KMH", self.brisk_walking_kmh),
            ("SPEED_HIKING_KMH", self.hiking_kmh),
            ("SPEED_JOGGING_KMH", self.jogging_kmh),
            ("SPEED_RUNNING_KMH", self.running_kmh),
            ("SPEED_CYCLING_KMH", self.cycling_kmh),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Number of candidate loops sampled per request
    pub population_size: usize,

    /// Greenery skew exponent; 1.0 is uniform, larger favours greener paths
    pub greenery_skew: f64,

    /// Attempts per candidate before a rejected sample is given up on
    pub max_resample_attempts: usize,

    pub speeds: SpeedTable,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            greenery_skew: DEFAULT_GREENERY_SKEW,
            max_resample_attempts: DEFAULT_MAX_RESAMPLE_ATTEMPTS,
            speeds: SpeedTable::default(),
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            population_size: parse_env("PLANNER_POPULATION_SIZE", defaults.population_size)?,
            greenery_skew: parse_env("PLANNER_GREENERY_SKEW", defaults.greenery_skew)?,
            max_resample_attempts: parse_env(
                "PLANNER_MAX_RESAMPLE_ATTEMPTS",
                defaults.max_resample_attempts,
            )?,
            speeds: SpeedTable {
                walking_kmh: parse_env("SPEED_WALKING_KMH", defaults.speeds.walking_kmh)?,
                brisk_walking_kmh: parse_env(
                    "SPEED_BRISK_WALKING_KMH",
                    defaults.speeds.brisk_walking_kmh,
                )?,
                hiking_kmh: parse_env("SPEED_HIKING_KMH", defaults.speeds.hiking_kmh)?,
                jogging_kmh: parse_env("SPEED_JOGGING_KMH", defaults.speeds.jogging_kmh)?,
                running_kmh: parse_env("SPEED_RUNNING_KMH", defaults.speeds.running_kmh)?,
                cycling_kmh: parse_env("SPEED_CYCLING_KMH", defaults.speeds.cycling_kmh)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 3 {
            return Err("PLANNER_POPULATION_SIZE must be at least 3".to_string());
        }
        if !(self.greenery_skew.is_finite() && self.greenery_skew > 0.0) {
            return Err("PLANNER_GREENERY_SKEW must be positive".to_string());
        }
        if self.max_resample_attempts == 0 {
            return Err("PLANNER_MAX_RESAMPLE_ATTEMPTS must be at least 1".to_string());
        }
        for (name, speed) in self.speeds.all() {
            if !(speed.is_finite() && speed > 0.0) {
                return Err(format!("{} must be positive", name));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PlanBConfig {
    /// Longest duration a single substitute may be given
    pub max_item_minutes: u32,

    /// Shortest duration worth listing
    pub min_item_minutes: u32,

    /// Maximum number of substitutes in one plan
    pub max_items: usize,

    /// Accepted gap as a fraction of the original calories
    pub tolerance_ratio: f64,

    /// Accepted gap floor (kcal)
    pub tolerance_floor_kcal: f64,
}

impl Default for PlanBConfig {
    fn default() -> Self {
        Self {
            max_item_minutes: DEFAULT_PLAN_B_MAX_ITEM_MINUTES,
            min_item_minutes: DEFAULT_PLAN_B_MIN_ITEM_MINUTES,
            max_items: DEFAULT_PLAN_B_MAX_ITEMS,
            tolerance_ratio: DEFAULT_PLAN_B_TOLERANCE_RATIO,
            tolerance_floor_kcal: DEFAULT_PLAN_B_TOLERANCE_FLOOR_KCAL,
        }
    }
}

impl PlanBConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let config = Self {
            max_item_minutes: parse_env("PLAN_B_MAX_ITEM_MINUTES", defaults.max_item_minutes)?,
            min_item_minutes: parse_env("PLAN_B_MIN_ITEM_MINUTES", defaults.min_item_minutes)?,
            max_items: parse_env("PLAN_B_MAX_ITEMS", defaults.max_items)?,
            tolerance_ratio: parse_env("PLAN_B_TOLERANCE_RATIO", defaults.tolerance_ratio)?,
            tolerance_floor_kcal: parse_env(
                "PLAN_B_TOLERANCE_FLOOR_KCAL",
                defaults.tolerance_floor_kcal,
            )?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min_item_minutes == 0 || self.min_item_minutes > self.max_item_minutes {
            return Err(
                "PLAN_B_MIN_ITEM_MINUTES must be between 1 and PLAN_B_MAX_ITEM_MINUTES"
                    .to_string(),
            );
        }
        if self.max_items == 0 {
            return Err("PLAN_B_MAX_ITEMS must be at least 1".to_string());
        }
        if !(0.0..1.0).contains(&self.tolerance_ratio) {
            return Err("PLAN_B_TOLERANCE_RATIO must be in [0, 1)".to_string());
        }
        if !(self.tolerance_floor_kcal.is_finite() && self.tolerance_floor_kcal >= 0.0) {
            return Err("PLAN_B_TOLERANCE_FLOOR_KCAL must be non-negative".to_string());
        }
        Ok(())
    }

    /// Accepted gap for a given calorie target.
    pub fn tolerance_for(&self, original_calories: f64) -> f64 {
        (original_calories * self.tolerance_ratio).max(self.tolerance_floor_kcal)
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        let defaults = WeatherConfig::default();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            weather: WeatherConfig {
                forecast_base_url: env::var("WEATHER_BASE_URL")
                    .unwrap_or(defaults.forecast_base_url),
                geocoding_base_url: env::var("GEOCODING_BASE_URL")
                    .unwrap_or(defaults.geocoding_base_url),
                cache_ttl_seconds: parse_env("WEATHER_CACHE_TTL", defaults.cache_ttl_seconds)?,
                timeout_seconds: parse_env("WEATHER_TIMEOUT_SECS", defaults.timeout_seconds)?,
            },
            planner: PlannerConfig::from_env()?,
            plan_b: PlanBConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read `key` from the environment, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T, String>
where
    T: FromStr + ToString,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| format!("Invalid {}", key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_speed_table_covers_route_types_only() {
        let speeds = SpeedTable::default();
        assert_eq!(speeds.speed_kmh(ExerciseType::Walking), Some(5.0));
        assert_eq!(speeds.speed_kmh(ExerciseType::Running), Some(9.0));
        assert_eq!(speeds.speed_kmh(ExerciseType::Cycling), Some(18.0));
        assert_eq!(speeds.speed_kmh(ExerciseType::Yoga), None);
    }

    #[test]
    fn test_tolerance_uses_larger_of_ratio_and_floor() {
        let config = PlanBConfig::default();
        assert_eq!(config.tolerance_for(100.0), 10.0);
        assert!((config.tolerance_for(1000.0) - 50.0).abs() < 1e-9);
    }

    #[test]
    #[serial]
    fn test_planner_config_from_env_overrides() {
        env::set_var("PLANNER_POPULATION_SIZE", "64");
        env::set_var("SPEED_RUNNING_KMH", "10.5");
        let config = PlannerConfig::from_env().unwrap();
        env::remove_var("PLANNER_POPULATION_SIZE");
        env::remove_var("SPEED_RUNNING_KMH");

        assert_eq!(config.population_size, 64);
        assert_eq!(config.speeds.running_kmh, 10.5);
        assert_eq!(config.speeds.walking_kmh, DEFAULT_SPEED_WALKING_KMH);
    }

    #[test]
    #[serial]
    fn test_planner_config_rejects_bad_values() {
        env::set_var("PLANNER_POPULATION_SIZE", "two");
        let err = PlannerConfig::from_env().unwrap_err();
        env::remove_var("PLANNER_POPULATION_SIZE");
        assert!(err.contains("PLANNER_POPULATION_SIZE"));

        env::set_var("SPEED_CYCLING_KMH", "0");
        let err = PlannerConfig::from_env().unwrap_err();
        env::remove_var("SPEED_CYCLING_KMH");
        assert!(err.contains("SPEED_CYCLING_KMH"));
    }

    #[test]
    #[serial]
    fn test_plan_b_config_validation() {
        env::set_var("PLAN_B_MIN_ITEM_MINUTES", "90");
        let err = PlanBConfig::from_env().unwrap_err();
        env::remove_var("PLAN_B_MIN_ITEM_MINUTES");
        assert!(err.contains("PLAN_B_MIN_ITEM_MINUTES"));

        let config = PlanBConfig::from_env().unwrap();
        assert_eq!(config.max_item_minutes, 60);
        assert_eq!(config.max_items, 4);
    }
}
