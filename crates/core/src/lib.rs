//! Shared types, errors, and input validation for the rental store.

pub mod error;
pub mod types;
pub mod validation;
