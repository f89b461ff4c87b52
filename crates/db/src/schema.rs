//! Idempotent schema bootstrap.
//!
//! Every statement is `CREATE TABLE IF NOT EXISTS`, so running this on each
//! process start is safe and leaves existing rows untouched. Order matters:
//! `rentals` references both other tables.

use sqlx::PgPool;

/// Table names in creation order.
pub const TABLES: [&str; 3] = ["movies", "customers", "rentals"];

const CREATE_MOVIES: &str = "
    CREATE TABLE IF NOT EXISTS movies (
        movie_id SERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        release_year INT NOT NULL,
        genre VARCHAR(100) NOT NULL,
        director VARCHAR(255) NOT NULL
    )";

const CREATE_CUSTOMERS: &str = "
    CREATE TABLE IF NOT EXISTS customers (
        customer_id SERIAL PRIMARY KEY,
        first_name VARCHAR(100) NOT NULL,
        last_name VARCHAR(100) NOT NULL,
        email VARCHAR(255) UNIQUE NOT NULL,
        phone_number TEXT NOT NULL
    )";

const CREATE_RENTALS: &str = "
    CREATE TABLE IF NOT EXISTS rentals (
        rental_id SERIAL PRIMARY KEY,
        customer_id INT REFERENCES customers(customer_id),
        movie_id INT REFERENCES movies(movie_id),
        rental_date DATE NOT NULL,
        return_date DATE
    )";

/// Ensure the `movies`, `customers`, and `rentals` tables exist.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    for (table, ddl) in TABLES
        .iter()
        .zip([CREATE_MOVIES, CREATE_CUSTOMERS, CREATE_RENTALS])
    {
        sqlx::query(ddl).execute(pool).await?;
        tracing::debug!(table, "Table ensured");
    }
    Ok(())
}
