//! Validation of raw command-line values before they reach the store.
//!
//! Numeric arguments arrive as strings; a value that does not parse is a
//! usage-level error and is never forwarded to a query.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Column limits
// ---------------------------------------------------------------------------

/// `Movies.title` is `VARCHAR(255)`.
pub const MAX_TITLE_LENGTH: usize = 255;
/// `Movies.genre` is `VARCHAR(100)`.
pub const MAX_GENRE_LENGTH: usize = 100;
/// `Movies.director` is `VARCHAR(255)`.
pub const MAX_DIRECTOR_LENGTH: usize = 255;
/// `Customers.email` is `VARCHAR(255)`.
pub const MAX_EMAIL_LENGTH: usize = 255;

// ---------------------------------------------------------------------------
// Numeric arguments
// ---------------------------------------------------------------------------

/// Parse a release year. Surrounding whitespace is ignored.
pub fn parse_year(raw: &str) -> Result<i32, CoreError> {
    raw.trim().parse::<i32>().map_err(|_| {
        CoreError::Validation(format!("Release year must be an integer, got '{raw}'"))
    })
}

/// Parse an entity identity for the given `field` (used in the message).
pub fn parse_id(field: &str, raw: &str) -> Result<DbId, CoreError> {
    raw.trim()
        .parse::<DbId>()
        .map_err(|_| CoreError::Validation(format!("{field} must be an integer, got '{raw}'")))
}

// ---------------------------------------------------------------------------
// Text arguments
// ---------------------------------------------------------------------------

/// Require `value` to be non-blank.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate that `value` fits the column it is stored in.
pub fn validate_length(field: &str, value: &str, max: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max} characters (got {len})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
