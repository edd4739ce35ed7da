use thiserror::Error;

/// Failures reported by the external API collaborators. These are surfaced
/// to the user as retryable; nothing in this crate retries on its own.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
