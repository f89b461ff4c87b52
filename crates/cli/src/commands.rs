//! Execution of validated commands against the store.
//!
//! Each command maps to one repository call. Expected outcomes, including
//! "no such customer", come back as [`Outcome`]; store failures come back as
//! [`OperationError`] and never abort the process.

use std::fmt;

use rental_core::types::DbId;
use rental_db::models::movie::Movie;
use rental_db::repositories::{CustomerRemoval, CustomerRepo, MovieRepo};
use rental_db::DbPool;

use crate::cli::Command;
use crate::error::{classify_sqlx_error, email_taken, CliError, OperationError};

/// The four user-invokable operations, named for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    InsertMovie,
    ListMovies,
    UpdateCustomerEmail,
    RemoveCustomer,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::InsertMovie => "insert movie",
            Operation::ListMovies => "list movies",
            Operation::UpdateCustomerEmail => "update customer email",
            Operation::RemoveCustomer => "remove customer",
        };
        f.write_str(name)
    }
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Command::InsertMovie(_) => Operation::InsertMovie,
            Command::ShowMovies => Operation::ListMovies,
            Command::UpdateCustomerEmail { .. } => Operation::UpdateCustomerEmail,
            Command::RemoveCustomer { .. } => Operation::RemoveCustomer,
        }
    }
}

/// Successful result of a command, rendered for the console via `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    MovieInserted { movie_id: DbId },
    Movies(Vec<Movie>),
    EmailUpdated { customer_id: DbId, email: String },
    CustomerRemoved { customer_id: DbId, rentals_removed: u64 },
    /// Update or removal matched no customer row.
    CustomerNotFound { customer_id: DbId },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::MovieInserted { movie_id } => {
                write!(f, "Inserted movie with ID: {movie_id}")
            }
            Outcome::Movies(movies) if movies.is_empty() => f.write_str("No movies found."),
            Outcome::Movies(movies) => {
                for (i, movie) in movies.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(
                        f,
                        "ID: {}, Title: {}, Year: {}, Genre: {}, Director: {}",
                        movie.movie_id,
                        movie.title,
                        movie.release_year,
                        movie.genre,
                        movie.director
                    )?;
                }
                Ok(())
            }
            Outcome::EmailUpdated { customer_id, email } => {
                write!(f, "Updated customer {customer_id}'s email to {email}")
            }
            Outcome::CustomerRemoved {
                customer_id,
                rentals_removed,
            } => {
                let noun = if *rentals_removed == 1 {
                    "rental"
                } else {
                    "rentals"
                };
                write!(
                    f,
                    "Removed customer with ID: {customer_id} ({rentals_removed} {noun} deleted)"
                )
            }
            Outcome::CustomerNotFound { customer_id } => {
                write!(f, "No customer found with ID: {customer_id}")
            }
        }
    }
}

/// Run one command. Store errors are classified and tagged with the
/// operation that produced them.
pub async fn execute(pool: &DbPool, command: Command) -> Result<Outcome, OperationError> {
    let operation = command.operation();
    tracing::debug!(%operation, "Executing command");

    run(pool, command)
        .await
        .map_err(|cause| OperationError { operation, cause })
}

async fn run(pool: &DbPool, command: Command) -> Result<Outcome, CliError> {
    match command {
        Command::InsertMovie(input) => {
            let movie = MovieRepo::create(pool, &input)
                .await
                .map_err(classify_sqlx_error)?;
            Ok(Outcome::MovieInserted {
                movie_id: movie.movie_id,
            })
        }
        Command::ShowMovies => {
            let movies = MovieRepo::list(pool).await.map_err(classify_sqlx_error)?;
            Ok(Outcome::Movies(movies))
        }
        Command::UpdateCustomerEmail { customer_id, email } => {
            let updated = CustomerRepo::update_email(pool, customer_id, &email)
                .await
                .map_err(|err| match classify_sqlx_error(err) {
                    CliError::UniqueViolation { .. } => email_taken(&email),
                    other => other,
                })?;
            Ok(match updated {
                Some(customer) => Outcome::EmailUpdated {
                    customer_id: customer.customer_id,
                    email: customer.email,
                },
                None => Outcome::CustomerNotFound { customer_id },
            })
        }
        Command::RemoveCustomer { customer_id } => {
            let CustomerRemoval {
                customer_found,
                rentals_removed,
            } = CustomerRepo::delete_with_rentals(pool, customer_id)
                .await
                .map_err(classify_sqlx_error)?;
            Ok(if customer_found {
                Outcome::CustomerRemoved {
                    customer_id,
                    rentals_removed,
                }
            } else {
                Outcome::CustomerNotFound { customer_id }
            })
        }
    }
}
