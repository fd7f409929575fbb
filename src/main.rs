use axum::Router;
use fitroute::config::Config;
use fitroute::db::{InMemoryPlanStore, PgPlanStore, PlanStore};
use fitroute::services::plan_b::PlanBEngine;
use fitroute::services::route_planner::RoutePlanner;
use fitroute::services::weather::{OpenMeteoClient, WeatherService};
use fitroute::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitroute=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting fitroute API server");
    tracing::info!(
        population_size = config.planner.population_size,
        weather_cache_ttl = config.weather.cache_ttl_seconds,
        "Configuration loaded successfully"
    );

    // Plan store: Postgres when configured, in-memory otherwise
    let plan_store: Arc<dyn PlanStore> = if let Some(ref database_url) = config.database_url {
        tracing::info!("Connecting to database...");
        let db_pool = fitroute::db::create_pool(database_url).await?;
        tracing::info!("Database connection established");

        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&db_pool).await?;
        tracing::info!("Database migrations completed");

        Arc::new(PgPlanStore::new(db_pool))
    } else {
        tracing::warn!("DATABASE_URL not configured. Using in-memory plan store.");
        Arc::new(InMemoryPlanStore::new())
    };

    // Initialize services
    let weather_service: Arc<dyn WeatherService> = Arc::new(OpenMeteoClient::new(&config.weather)?);
    let route_planner = RoutePlanner::new(config.planner.clone());
    let plan_b_engine = PlanBEngine::new(config.plan_b.clone());

    // Create application state
    let state = Arc::new(AppState {
        plan_store,
        weather_service,
        route_planner,
        plan_b_engine,
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api", fitroute::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
