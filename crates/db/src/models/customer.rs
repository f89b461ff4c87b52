//! Customer entity model and DTOs.

use rental_core::types::DbId;
use sqlx::FromRow;

/// A row from the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Customer {
    pub customer_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}

/// DTO for inserting a new customer. Customers are registered outside the
/// CLI; this exists for seeding and tests.
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
}
