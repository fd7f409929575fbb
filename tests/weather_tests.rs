use axum::{extract::State, routing::get, Json, Router};
use fitroute::config::WeatherConfig;
use fitroute::models::{GeoPoint, PlanLocation, Severity};
use fitroute::services::weather::{OpenMeteoClient, WeatherService};
use fitroute::AppError;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

mod common;

#[derive(Default)]
struct Hits {
    forecast: AtomicUsize,
    search: AtomicUsize,
}

async fn forecast(State(hits): State<Arc<Hits>>) -> Json<Value> {
    hits.forecast.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "latitude": 39.9,
        "longitude": 116.4,
        "current_weather": {
            "temperature": 41.5,
            "windspeed": 12.0,
            "winddirection": 180,
            "weathercode": 63,
            "time": "2024-07-01T14:00"
        }
    }))
}

async fn search(State(hits): State<Arc<Hits>>) -> Json<Value> {
    hits.search.fetch_add(1, Ordering::SeqCst);
    Json(json!({
        "results": [{"name": "北京", "latitude": 39.9042, "longitude": 116.4074}]
    }))
}

async fn no_results() -> Json<Value> {
    Json(json!({"generationtime_ms": 0.2}))
}

/// Serve a stand-in for the forecast and geocoding APIs on a random local port.
async fn spawn_stub(hits: Arc<Hits>) -> WeatherConfig {
    let app = Router::new()
        .route("/v1/forecast", get(forecast))
        .route("/v1/search", get(search))
        .route("/v1/empty", get(no_results))
        .with_state(hits);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    WeatherConfig {
        forecast_base_url: format!("http://{}/v1/forecast", addr),
        geocoding_base_url: format!("http://{}/v1/search", addr),
        cache_ttl_seconds: 600,
        timeout_seconds: 5,
    }
}

#[tokio::test]
async fn test_assessment_is_cached_per_rounded_coordinate() {
    let hits = Arc::new(Hits::default());
    let client = OpenMeteoClient::new(&spawn_stub(hits.clone()).await).unwrap();

    let first = client
        .assess(&PlanLocation::Coordinates(GeoPoint::new(39.9042, 116.4074).unwrap()))
        .await
        .unwrap();
    // Rounds to the same 0.01 degree cell
    let second = client
        .assess(&PlanLocation::Coordinates(GeoPoint::new(39.9012, 116.4051).unwrap()))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(hits.forecast.load(Ordering::SeqCst), 1);

    assert_eq!(first.severity, Severity::Severe);
    assert!(first.is_bad_weather);
    assert_eq!(first.description, "中雨");
    assert_eq!(first.warnings, vec!["极端高温（41.5℃），有中暑风险".to_string()]);
}

#[tokio::test]
async fn test_address_is_geocoded_once() {
    let hits = Arc::new(Hits::default());
    let client = OpenMeteoClient::new(&spawn_stub(hits.clone()).await).unwrap();
    let location = PlanLocation::Address("北京".to_string());

    client.assess(&location).await.unwrap();
    client.assess(&location).await.unwrap();

    assert_eq!(hits.search.load(Ordering::SeqCst), 1);
    assert_eq!(hits.forecast.load(Ordering::SeqCst), 1);

    let point = client.geocode("北京").await.unwrap();
    assert_eq!(point, GeoPoint::new(39.9042, 116.4074).unwrap());
}

#[tokio::test]
async fn test_unknown_address_is_invalid_parameter() {
    let hits = Arc::new(Hits::default());
    let mut config = spawn_stub(hits).await;
    config.geocoding_base_url = config.geocoding_base_url.replace("/v1/search", "/v1/empty");
    let client = OpenMeteoClient::new(&config).unwrap();

    match client.geocode("不存在的地方").await {
        Err(AppError::InvalidParameter { field, .. }) => assert_eq!(field, "address"),
        other => panic!("expected InvalidParameter, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_error_maps_to_unavailable() {
    let hits = Arc::new(Hits::default());
    let mut config = spawn_stub(hits).await;
    config.forecast_base_url = config.forecast_base_url.replace("/v1/forecast", "/v1/missing");
    let client = OpenMeteoClient::new(&config).unwrap();

    let result = client
        .current_weather(GeoPoint::new(31.23, 121.47).unwrap())
        .await;
    assert!(matches!(result, Err(AppError::WeatherUnavailable(_))));
}

#[tokio::test]
async fn test_open_meteo_live_forecast() {
    if common::should_skip_real_api_tests() {
        println!("Skipping real API test");
        return;
    }

    let client = OpenMeteoClient::new(&WeatherConfig::default()).unwrap();
    let assessment = client
        .assess(&PlanLocation::Coordinates(GeoPoint::new(39.9042, 116.4074).unwrap()))
        .await;

    assert!(assessment.is_ok(), "Open-Meteo call should succeed");
    let assessment = assessment.unwrap();
    assert!(!assessment.description.is_empty());
    assert!(!assessment.recommendation.is_empty());
}
