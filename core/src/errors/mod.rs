//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{ErrorResponse, StoreError, TokenError};

use thiserror::Error;

/// Umbrella error for the token service façade.
#[derive(Error, Debug)]
pub enum DomainError {
    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Convert DomainError to ErrorResponse
impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Token(e) => e.into(),
            DomainError::Store(e) => e.into(),
        }
    }
}
