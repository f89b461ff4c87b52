//! Command-line surface.
//!
//! clap enforces the command name and each command's positional arity;
//! numeric and text values are then validated before a [`Command`] is
//! produced. Anything that fails either step becomes [`Invocation::Usage`],
//! and no store access happens for it.

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use rental_core::error::CoreError;
use rental_core::types::DbId;
use rental_core::validation::{
    parse_id, parse_year, validate_length, validate_required, MAX_EMAIL_LENGTH,
};
use rental_db::models::movie::CreateMovie;

/// Help text printed for any usage or validation error.
pub const USAGE: &str = "\
Usage:
  insert <title> <year> <genre> <director> - Insert a movie
  show - Show all movies
  update <customer_id> <new_email> - Update a customer's email
  remove <customer_id> - Remove a customer from the database
";

/// Manage the movie rental database.
#[derive(Parser, Debug)]
#[command(name = "rental-store", disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: RawCommand,
}

/// Commands as typed on the command line, before value validation.
#[derive(Subcommand, Debug)]
enum RawCommand {
    /// Insert a movie
    Insert {
        #[arg(allow_hyphen_values = true)]
        title: String,
        #[arg(allow_hyphen_values = true)]
        year: String,
        #[arg(allow_hyphen_values = true)]
        genre: String,
        #[arg(allow_hyphen_values = true)]
        director: String,
    },

    /// Show all movies
    Show,

    /// Update a customer's email
    Update {
        #[arg(allow_hyphen_values = true)]
        customer_id: String,
        #[arg(allow_hyphen_values = true)]
        new_email: String,
    },

    /// Remove a customer from the database
    Remove {
        #[arg(allow_hyphen_values = true)]
        customer_id: String,
    },
}

/// A validated request for one store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InsertMovie(CreateMovie),
    ShowMovies,
    UpdateCustomerEmail { customer_id: DbId, email: String },
    RemoveCustomer { customer_id: DbId },
}

/// What the process should do with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Command),
    /// Print [`USAGE`], preceded by `reason` when a value failed validation.
    Usage { reason: Option<String> },
}

/// Parse a full argument list, including the program name in position 0.
pub fn parse<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let raw = match Cli::try_parse_from(args) {
        Ok(cli) => cli.command,
        Err(err) => {
            tracing::debug!(kind = ?err.kind(), "Argument parsing failed");
            return Invocation::Usage { reason: None };
        }
    };

    match validate(raw) {
        Ok(command) => Invocation::Run(command),
        Err(CoreError::Validation(msg)) => Invocation::Usage { reason: Some(msg) },
        Err(other) => Invocation::Usage {
            reason: Some(other.to_string()),
        },
    }
}

fn validate(raw: RawCommand) -> Result<Command, CoreError> {
    match raw {
        RawCommand::Insert {
            title,
            year,
            genre,
            director,
        } => {
            let movie = CreateMovie {
                title,
                release_year: parse_year(&year)?,
                genre,
                director,
            };
            movie.validate()?;
            Ok(Command::InsertMovie(movie))
        }
        RawCommand::Show => Ok(Command::ShowMovies),
        RawCommand::Update {
            customer_id,
            new_email,
        } => {
            let customer_id = parse_id("Customer ID", &customer_id)?;
            validate_required("Email", &new_email)?;
            validate_length("Email", &new_email, MAX_EMAIL_LENGTH)?;
            Ok(Command::UpdateCustomerEmail {
                customer_id,
                email: new_email,
            })
        }
        RawCommand::Remove { customer_id } => Ok(Command::RemoveCustomer {
            customer_id: parse_id("Customer ID", &customer_id)?,
        }),
    }
}
