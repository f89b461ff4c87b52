use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod models;
pub mod repositories;
pub mod schema;

pub use config::DbConfig;
pub use schema::init_schema;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the resolved configuration.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(config.connect_options())
        .await
}

/// Round-trip a trivial query to confirm the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
