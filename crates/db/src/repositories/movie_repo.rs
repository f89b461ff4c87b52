//! Repository for the `movies` table.

use rental_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "movie_id, title, release_year, genre, director";

/// Provides insert and read access to movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row with its assigned ID.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, release_year, genre, director)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let movie = sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.release_year)
            .bind(&input.genre)
            .bind(&input.director)
            .fetch_one(pool)
            .await?;
        tracing::debug!(movie_id = movie.movie_id, title = %movie.title, "Movie inserted");
        Ok(movie)
    }

    /// Find a movie by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE movie_id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every movie in ID order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY movie_id");
        sqlx::query_as::<_, Movie>(&query).fetch_all(pool).await
    }
}
