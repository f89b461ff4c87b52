use rental_core::error::CoreError;
use rental_db::config::ConfigError;

use crate::commands::Operation;

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL SQLSTATE for `foreign_key_violation`.
pub const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Application-level error type for the CLI.
///
/// Wraps [`CoreError`] for domain errors and adds store- and
/// configuration-specific variants.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A domain-level error from `rental_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Connection settings could not be resolved.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A write collided with a unique constraint.
    #[error("Duplicate value violates unique constraint: {constraint}")]
    UniqueViolation { constraint: String },

    /// A write referenced a row that does not exist, or removed one still referenced.
    #[error("Foreign key constraint violated: {constraint}")]
    ForeignKeyViolation { constraint: String },

    /// Any other database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A store failure tagged with the operation that hit it.
#[derive(Debug, thiserror::Error)]
#[error("{operation} failed: {cause}")]
pub struct OperationError {
    pub operation: Operation,
    #[source]
    pub cause: CliError,
}

/// Classify a sqlx error by SQLSTATE.
///
/// - `23505` maps to [`CliError::UniqueViolation`].
/// - `23503` maps to [`CliError::ForeignKeyViolation`].
/// - Everything else stays a [`CliError::Database`].
pub fn classify_sqlx_error(err: sqlx::Error) -> CliError {
    if let sqlx::Error::Database(db_err) = &err {
        let constraint = db_err.constraint().unwrap_or("unknown").to_string();
        match db_err.code().as_deref() {
            Some(UNIQUE_VIOLATION) => return CliError::UniqueViolation { constraint },
            Some(FOREIGN_KEY_VIOLATION) => return CliError::ForeignKeyViolation { constraint },
            _ => {}
        }
    }
    CliError::Database(err)
}

/// Conflict reported when a customer's new email belongs to someone else.
pub fn email_taken(email: &str) -> CliError {
    CliError::Core(CoreError::Conflict(format!(
        "email '{email}' is already in use by another customer"
    )))
}
