//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! status codes and the `{"detail": ...}` response envelope.

use thiserror::Error as ThisError;

/// Failure raised by a domain operation or request validation.
///
/// Each variant carries the human-readable detail string surfaced to the
/// caller; the variant itself determines the HTTP status the adapter picks.
///
/// # Examples
/// ```
/// use finpercent_backend::domain::Error;
///
/// let err = Error::not_found("Method not found");
/// assert_eq!(err.to_string(), "Method not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[non_exhaustive]
pub enum Error {
    /// The request body is malformed or fails schema validation.
    #[error("{0}")]
    Validation(String),
    /// A path or query parameter is outside the accepted set.
    #[error("{0}")]
    InvalidRequest(String),
    /// Credential check failed.
    #[error("{0}")]
    Unauthorized(String),
    /// The requested resource does not exist.
    #[error("{0}")]
    NotFound(String),
    /// An unexpected failure inside the service.
    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// Convenience constructor for [`Error::Validation`].
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }

    /// Convenience constructor for [`Error::InvalidRequest`].
    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self::InvalidRequest(detail.into())
    }

    /// Convenience constructor for [`Error::Unauthorized`].
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        Self::Unauthorized(detail.into())
    }

    /// Convenience constructor for [`Error::NotFound`].
    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::NotFound(detail.into())
    }

    /// Convenience constructor for [`Error::Internal`].
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal(detail.into())
    }
}
