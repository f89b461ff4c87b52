//! Rental entity model and DTOs.

use rental_core::types::{DbId, RentalDate};
use sqlx::FromRow;

/// A row from the `rentals` table. `return_date` is `None` while the movie
/// is still out.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Rental {
    pub rental_id: DbId,
    pub customer_id: Option<DbId>,
    pub movie_id: Option<DbId>,
    pub rental_date: RentalDate,
    pub return_date: Option<RentalDate>,
}

/// DTO for recording a rental.
#[derive(Debug, Clone)]
pub struct CreateRental {
    pub customer_id: DbId,
    pub movie_id: DbId,
    pub rental_date: RentalDate,
    pub return_date: Option<RentalDate>,
}
