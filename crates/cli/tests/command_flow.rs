//! End-to-end command tests: parse real argument lists, execute them
//! against a fresh database, and check the rendered console output.

use assert_matches::assert_matches;
use chrono::NaiveDate;
use rental_cli::cli::{self, Command, Invocation};
use rental_cli::commands::{self, Operation, Outcome};
use rental_cli::error::CliError;
use rental_core::error::CoreError;
use rental_db::models::customer::{CreateCustomer, Customer};
use rental_db::models::movie::CreateMovie;
use rental_db::models::rental::CreateRental;
use rental_db::repositories::{CustomerRepo, MovieRepo, RentalRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn command(args: &[&str]) -> Command {
    match cli::parse(std::iter::once("rental-store").chain(args.iter().copied())) {
        Invocation::Run(command) => command,
        Invocation::Usage { reason } => panic!("{args:?} should parse, got usage ({reason:?})"),
    }
}

async fn run(pool: &PgPool, args: &[&str]) -> String {
    commands::execute(pool, command(args))
        .await
        .unwrap_or_else(|e| panic!("{args:?} failed: {e}"))
        .to_string()
}

async fn seed_customer(pool: &PgPool, first: &str, email: &str) -> Customer {
    CustomerRepo::create(
        pool,
        &CreateCustomer {
            first_name: first.to_string(),
            last_name: "Renter".to_string(),
            email: email.to_string(),
            phone_number: "555-0199".to_string(),
        },
    )
    .await
    .unwrap()
}

async fn movie_count(pool: &PgPool) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies")
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

// ---------------------------------------------------------------------------
// Startup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_prepare_store_twice_keeps_data(pool: PgPool) {
    rental_cli::prepare_store(&pool).await.unwrap();
    run(&pool, &["insert", "Heat", "1995", "Crime", "Michael Mann"]).await;

    rental_cli::prepare_store(&pool).await.unwrap();
    assert_eq!(movie_count(&pool).await, 1);
}

// ---------------------------------------------------------------------------
// insert / show
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_insert_then_show(pool: PgPool) {
    rental_cli::prepare_store(&pool).await.unwrap();

    let inserted = run(
        &pool,
        &["insert", "Inception", "2010", "Sci-Fi", "Christopher Nolan"],
    )
    .await;
    assert_eq!(inserted, "Inserted movie with ID: 1");

    let shown = run(&pool, &["show"]).await;
    assert_eq!(
        shown,
        "ID: 1, Title: Inception, Year: 2010, Genre: Sci-Fi, Director: Christopher Nolan"
    );
}

#[sqlx::test(migrations = false)]
async fn test_show_empty_store(pool: PgPool) {
    rental_cli::prepare_store(&pool).await.unwrap();
    assert_eq!(run(&pool, &["show"]).await, "No movies found.");
}

#[sqlx::test(migrations = false)]
async fn test_insert_reports_assigned_id(pool: PgPool) {
    rental_cli::prepare_store(&pool).await.unwrap();

    let first = MovieRepo::create(
        &pool,
        &CreateMovie {
            title: "Alien".into(),
            release_year: 1979,
            genre: "Horror".into(),
            director: "Ridley Scott".into(),
        },
    )
    .await
    .unwrap();

    let outcome = commands::execute(
        &pool,
        command(&["insert", "Aliens", "1986", "Action", "James Cameron"]),
    )
    .await
    .unwrap();
    let Outcome::MovieInserted { movie_id } = outcome else {
        panic!("expected MovieInserted, got {outcome:?}");
    };
    assert!(movie_id > first.movie_id);

    let stored = MovieRepo::find_by_id(&pool, movie_id).await.unwrap().unwrap();
    assert_eq!(stored.title, "Aliens");
    assert_eq!(stored.release_year, 1986);
}

#[sqlx::test(migrations = false)]
async fn test_short_insert_never_reaches_store(pool: PgPool) {
    rental_cli::prepare_store(&pool).await.unwrap();

    let invocation = cli::parse(["rental-store", "insert", "Inception", "2010", "Sci-Fi"]);
    assert_eq!(invocation, Invocation::Usage { reason: None });

    let invocation = cli::parse(["rental-store", "insert", "Inception", "soon", "Sci-Fi", "N"]);
    assert_matches!(invocation, Invocation::Usage { reason: Some(_) });

    assert_eq!(movie_count(&pool).await, 0);
}

// ---------------------------------------------------------------------------
// update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_update_existing_customer(pool: PgPool) {
    rental_cli::prepare_store(&pool).await.unwrap();
    let alice = seed_customer(&pool, "Alice", "alice@example.com").await;
    let bob = seed_customer(&pool, "Bob", "bob@example.com").await;

    let id = alice.customer_id.to_string();
    let out = run(&pool, &["update", &id, "alice@new.example"]).await;
    assert_eq!(out, format!("Updated customer {id}'s email to alice@new.example"));

    let bob_after = CustomerRepo::find_by_id(&pool, bob.customer_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(bob_after.email, "bob@example.com");
}

#[sqlx::test(migrations = false)]
async fn test_update_unknown_customer_reports_not_found(pool: PgPool) {
    rental_cli::prepare_store(&pool).await.unwrap();
    let alice = seed_customer(&pool, "Alice", "alice@example.com").await;

    let out = run(&pool, &["update", "9999", "ghost@example.com"]).await;
    assert_eq!(out, "No customer found with ID: 9999");

    let alice_after = CustomerRepo::find_by_id(&pool, alice.customer_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(alice_after, alice);
}

#[sqlx::test(migrations = false)]
async fn test_update_to_taken_email_is_conflict(pool: PgPool) {
    rental_cli::prepare_store(&pool).await.unwrap();
    let alice = seed_customer(&pool, "Alice", "alice@example.com").await;
    let bob = seed_customer(&pool, "Bob", "bob@example.com").await;

    let id = bob.customer_id.to_string();
    let err = commands::execute(&pool, command(&["update", &id, "alice@example.com"]))
        .await
        .expect_err("taken email should fail");

    assert_eq!(err.operation, Operation::UpdateCustomerEmail);
    assert_matches!(err.cause, CliError::Core(CoreError::Conflict(_)));
    assert!(err.to_string().contains("alice@example.com"));

    for (customer, email) in [(&alice, "alice@example.com"), (&bob, "bob@example.com")] {
        let after = CustomerRepo::find_by_id(&pool, customer.customer_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(after.email, email);
    }
}

// ---------------------------------------------------------------------------
// remove
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_remove_customer_with_rentals(pool: PgPool) {
    rental_cli::prepare_store(&pool).await.unwrap();
    let alice = seed_customer(&pool, "Alice", "alice@example.com").await;
    let movie = MovieRepo::create(
        &pool,
        &CreateMovie {
            title: "Paris, Texas".into(),
            release_year: 1984,
            genre: "Drama".into(),
            director: "Wim Wenders".into(),
        },
    )
    .await
    .unwrap();

    for day in [1, 8] {
        RentalRepo::create(
            &pool,
            &CreateRental {
                customer_id: alice.customer_id,
                movie_id: movie.movie_id,
                rental_date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
                return_date: None,
            },
        )
        .await
        .unwrap();
    }

    let id = alice.customer_id.to_string();
    let out = run(&pool, &["remove", &id]).await;
    assert_eq!(out, format!("Removed customer with ID: {id} (2 rentals deleted)"));

    assert!(CustomerRepo::find_by_id(&pool, alice.customer_id)
        .await
        .unwrap()
        .is_none());
    assert!(RentalRepo::list_by_customer(&pool, alice.customer_id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = false)]
async fn test_remove_unknown_customer_reports_not_found(pool: PgPool) {
    rental_cli::prepare_store(&pool).await.unwrap();
    seed_customer(&pool, "Alice", "alice@example.com").await;

    let out = run(&pool, &["remove", "4040"]).await;
    assert_eq!(out, "No customer found with ID: 4040");
}

// ---------------------------------------------------------------------------
// Store failures
// ---------------------------------------------------------------------------

/// Without the schema every operation fails with a database error instead
/// of panicking.
#[sqlx::test(migrations = false)]
async fn test_missing_schema_is_reported_per_operation(pool: PgPool) {
    let err = commands::execute(&pool, command(&["show"]))
        .await
        .expect_err("movies table does not exist");
    assert_eq!(err.operation, Operation::ListMovies);
    assert_matches!(err.cause, CliError::Database(_));
    assert!(err.to_string().starts_with("list movies failed:"));
}

/// A closed pool surfaces as a handled error, not a crash.
#[sqlx::test(migrations = false)]
async fn test_closed_pool_is_reported(pool: PgPool) {
    rental_cli::prepare_store(&pool).await.unwrap();
    pool.close().await;

    let err = commands::execute(&pool, command(&["remove", "1"]))
        .await
        .expect_err("pool is closed");
    assert_eq!(err.operation, Operation::RemoveCustomer);
    assert_matches!(err.cause, CliError::Database(sqlx::Error::PoolClosed));
}
