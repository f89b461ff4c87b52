//! Movie entity model and DTOs.

use rental_core::error::CoreError;
use rental_core::types::DbId;
use rental_core::validation::{
    validate_length, validate_required, MAX_DIRECTOR_LENGTH, MAX_GENRE_LENGTH, MAX_TITLE_LENGTH,
};
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Movie {
    pub movie_id: DbId,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
}

/// DTO for inserting a new movie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateMovie {
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub director: String,
}

impl CreateMovie {
    /// Check the text fields against the `movies` column definitions.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_required("Title", &self.title)?;
        validate_length("Title", &self.title, MAX_TITLE_LENGTH)?;
        validate_length("Genre", &self.genre, MAX_GENRE_LENGTH)?;
        validate_length("Director", &self.director, MAX_DIRECTOR_LENGTH)?;
        Ok(())
    }
}
