use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

pub mod memory;
mod plan_queries;
pub mod plan_store;

pub use memory::InMemoryPlanStore;
pub use plan_store::{PgPlanStore, PlanStore, RawPlanRow};

pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}
