/// All primary keys are PostgreSQL SERIAL (int4).
pub type DbId = i32;

/// Rental and return dates carry no time-of-day component.
pub type RentalDate = chrono::NaiveDate;
