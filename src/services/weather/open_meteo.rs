use super::assessment::assess;
use super::WeatherService;
use crate::config::WeatherConfig;
use crate::constants::{DEFAULT_WEATHER_CACHE_MAX_ENTRIES, WEATHER_CACHE_COORD_PRECISION};
use crate::error::{AppError, Result};
use crate::models::{CurrentWeather, GeoPoint, PlanLocation, WeatherAssessment};
use async_trait::async_trait;
use moka::future::Cache;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<CurrentWeather>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    latitude: f64,
    longitude: f64,
}

/// Open-Meteo forecast and geocoding client.
/// Assessments are cached per rounded coordinate, geocoding results per address.
#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    forecast_base_url: String,
    geocoding_base_url: String,
    assessments: Cache<String, WeatherAssessment>,
    geocodes: Cache<String, GeoPoint>,
}

impl OpenMeteoClient {
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        let ttl = Duration::from_secs(config.cache_ttl_seconds);

        Ok(OpenMeteoClient {
            client,
            forecast_base_url: config.forecast_base_url.clone(),
            geocoding_base_url: config.geocoding_base_url.clone(),
            assessments: Cache::builder()
                .time_to_live(ttl)
                .max_capacity(DEFAULT_WEATHER_CACHE_MAX_ENTRIES)
                .build(),
            geocodes: Cache::builder()
                .max_capacity(DEFAULT_WEATHER_CACHE_MAX_ENTRIES)
                .build(),
        })
    }

    /// Resolve an address to coordinates using the first geocoding match.
    pub async fn geocode(&self, address: &str) -> Result<GeoPoint> {
        let address = address.trim();
        if address.is_empty() {
            return Err(AppError::invalid("address", "must not be empty"));
        }
        if let Some(point) = self.geocodes.get(address).await {
            tracing::debug!("Geocode cache hit for address: {}", address);
            return Ok(point);
        }

        let response = self
            .client
            .get(&self.geocoding_base_url)
            .query(&[
                ("name", address),
                ("count", "1"),
                ("language", "zh"),
                ("format", "json"),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherUnavailable(format!("Geocoding request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(status = %status, address, "Geocoding API HTTP error {}", status);
            return Err(AppError::WeatherUnavailable(format!(
                "Geocoding HTTP {}",
                status
            )));
        }

        let body: GeocodingResponse = response.json().await.map_err(|e| {
            AppError::WeatherUnavailable(format!("Failed to parse geocoding response: {}", e))
        })?;

        let first = body.results.into_iter().next().ok_or_else(|| {
            AppError::invalid("address", format!("no location found for '{}'", address))
        })?;
        let point = GeoPoint::new(first.latitude, first.longitude)
            .map_err(|e| AppError::WeatherUnavailable(format!("Geocoding returned {}", e)))?;

        self.geocodes.insert(address.to_string(), point).await;
        Ok(point)
    }

    /// Fetch raw current conditions at `point`.
    pub async fn current_weather(&self, point: GeoPoint) -> Result<CurrentWeather> {
        let response = self
            .client
            .get(&self.forecast_base_url)
            .query(&[
                ("latitude", point.lat.to_string()),
                ("longitude", point.lng.to_string()),
                ("current_weather", "true".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::WeatherUnavailable(format!("Forecast request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(
                status = %status,
                lat = point.lat,
                lng = point.lng,
                "Forecast API HTTP error {}",
                status
            );
            return Err(AppError::WeatherUnavailable(format!(
                "Forecast HTTP {}",
                status
            )));
        }

        let body: ForecastResponse = response.json().await.map_err(|e| {
            AppError::WeatherUnavailable(format!("Failed to parse forecast response: {}", e))
        })?;

        body.current_weather.ok_or_else(|| {
            AppError::WeatherUnavailable("Forecast response has no current_weather".to_string())
        })
    }

    async fn assess_point(&self, point: GeoPoint) -> Result<WeatherAssessment> {
        let rounded = point.round(WEATHER_CACHE_COORD_PRECISION);
        let key = format!("{:.2},{:.2}", rounded.lat, rounded.lng);

        if let Some(cached) = self.assessments.get(&key).await {
            tracing::debug!("Weather cache hit: {}", key);
            return Ok(cached);
        }

        let current = self.current_weather(rounded).await?;
        let assessment = assess(&current);

        tracing::info!(
            lat = rounded.lat,
            lng = rounded.lng,
            severity = %assessment.severity,
            weathercode = ?current.weathercode,
            "Assessed current weather"
        );

        self.assessments.insert(key, assessment.clone()).await;
        Ok(assessment)
    }
}

#[async_trait]
impl WeatherService for OpenMeteoClient {
    async fn assess(&self, location: &PlanLocation) -> Result<WeatherAssessment> {
        let point = match location {
            PlanLocation::Coordinates(point) => *point,
            PlanLocation::Address(address) => self.geocode(address).await?,
        };
        self.assess_point(point).await
    }
}
