use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollError {
    /// The requested question or choice does not exist, is not yet
    /// published, or the choice belongs to a different question. Callers
    /// are not given enough to tell those cases apart.
    #[error("Not found")]
    NotFound,
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}
