//! `rental-cli` library crate.
//!
//! Argument parsing, command execution, and error reporting for the
//! `rental-store` binary, exposed for integration testing. The binary
//! entrypoint lives in `main.rs`.

pub mod cli;
pub mod commands;
pub mod error;

use rental_db::{DbConfig, DbPool};

use crate::error::CliError;

/// Log filter used when `RUST_LOG` is unset. `rental_store` is the binary's
/// own target.
pub const DEFAULT_LOG_FILTER: &str = "rental_store=warn,rental_cli=warn,rental_db=warn";

/// Resolve configuration from the environment and open the pool.
pub async fn connect_from_env() -> Result<DbPool, CliError> {
    let config = DbConfig::from_env()?;
    tracing::debug!(
        target_db = %config.target(),
        max_connections = config.max_connections,
        "Loaded database configuration",
    );

    let pool = rental_db::create_pool(&config).await?;
    tracing::debug!("Database connection pool created");
    Ok(pool)
}

/// Confirm the store is reachable and ensure the schema exists.
///
/// Any failure here is fatal: no command can run without the tables.
pub async fn prepare_store(pool: &DbPool) -> Result<(), CliError> {
    rental_db::health_check(pool).await?;
    tracing::debug!("Database health check passed");

    rental_db::init_schema(pool).await?;
    tracing::debug!("Schema ensured");
    Ok(())
}
