/// Domain-level errors shared by the store and the CLI.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An input value was rejected before reaching the store.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A write collided with existing data, such as a taken email.
    #[error("Conflict: {0}")]
    Conflict(String),
}
