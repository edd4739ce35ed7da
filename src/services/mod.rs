pub mod calendar;
pub mod categorize;
pub mod clients;
pub mod dashboard;
pub mod notices;
pub mod stats;
pub mod storage;

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Failures surfaced to service callers. Presented to the user as
/// retryable; the services never retry on their own.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found")]
    NotFound,

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Type constraint error: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other.to_string()),
        }
    }
}
