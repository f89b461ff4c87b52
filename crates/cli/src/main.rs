//! `rental-store` -- manage the movie rental database from the shell.
//!
//! Connection settings come from the environment (or a `.env` file); see
//! [`rental_db::config`] for the full list. `RUST_LOG` controls diagnostics,
//! which are written to stderr.

use std::process::ExitCode;

use rental_cli::cli::{self, Invocation, USAGE};
use rental_cli::commands;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| rental_cli::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = match cli::parse(std::env::args_os()) {
        Invocation::Run(command) => command,
        Invocation::Usage { reason } => {
            if let Some(reason) = reason {
                println!("{reason}");
            }
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
    };

    let pool = match rental_cli::connect_from_env().await {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!(error = %err, "Failed to connect to database");
            return ExitCode::FAILURE;
        }
    };

    // From here on every path falls through to `pool.close()`.
    let exit = match rental_cli::prepare_store(&pool).await {
        Ok(()) => {
            match commands::execute(&pool, command).await {
                Ok(outcome) => println!("{outcome}"),
                Err(err) => {
                    tracing::debug!(error = ?err, "Command failed");
                    eprintln!("Error: {err}");
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to initialize database schema");
            ExitCode::FAILURE
        }
    };

    pool.close().await;
    tracing::debug!("Connection pool closed");
    exit
}
