//! Repository for the `customers` table.

use rental_core::types::DbId;
use sqlx::PgPool;

use crate::models::customer::{CreateCustomer, Customer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "customer_id, first_name, last_name, email, phone_number";

/// Result of [`CustomerRepo::delete_with_rentals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerRemoval {
    /// Whether a customer row was actually deleted.
    pub customer_found: bool,
    /// Rental rows removed before the customer.
    pub rentals_removed: u64,
}

/// Provides CRUD operations for customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Insert a new customer, returning the created row.
    ///
    /// Fails with a unique violation if `email` is already registered.
    pub async fn create(pool: &PgPool, input: &CreateCustomer) -> Result<Customer, sqlx::Error> {
        let query = format!(
            "INSERT INTO customers (first_name, last_name, email, phone_number)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Customer>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.phone_number)
            .fetch_one(pool)
            .await
    }

    /// Find a customer by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM customers WHERE customer_id = $1");
        sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace a customer's email.
    ///
    /// Returns `None` if no row with the given `id` exists. Fails with a
    /// unique violation if another customer already holds `email`.
    pub async fn update_email(
        pool: &PgPool,
        id: DbId,
        email: &str,
    ) -> Result<Option<Customer>, sqlx::Error> {
        let query = format!(
            "UPDATE customers SET email = $2
             WHERE customer_id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Customer>(&query)
            .bind(id)
            .bind(email)
            .fetch_optional(pool)
            .await?;
        tracing::debug!(customer_id = id, found = updated.is_some(), "Customer email update");
        Ok(updated)
    }

    /// Delete a customer and all of their rentals in one transaction.
    ///
    /// Rentals go first since `rentals.customer_id` does not cascade. If
    /// either statement fails the transaction is dropped uncommitted and
    /// rolls back, so rentals are never removed without their customer.
    pub async fn delete_with_rentals(
        pool: &PgPool,
        id: DbId,
    ) -> Result<CustomerRemoval, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let rentals = sqlx::query("DELETE FROM rentals WHERE customer_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let customers = sqlx::query("DELETE FROM customers WHERE customer_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let removal = CustomerRemoval {
            customer_found: customers.rows_affected() > 0,
            rentals_removed: rentals.rows_affected(),
        };
        tracing::debug!(
            customer_id = id,
            customer_found = removal.customer_found,
            rentals_removed = removal.rentals_removed,
            "Customer removal committed",
        );
        Ok(removal)
    }
}
