//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The weather provider could not be reached or answered with a failure status
    #[error("External service error: {0}")]
    ExternalService(String),

    /// The weather provider answered, but the payload had an unexpected shape
    #[error("Upstream format error: {0}")]
    UpstreamFormat(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
