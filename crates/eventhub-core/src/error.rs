//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    /// An input violated a domain invariant. Raised by construction and by
    /// mutators, always before any field is written.
    #[error("validation error: {0}")]
    Validation(String),

    /// A lifecycle operation was attempted from a status that does not
    /// permit it. Carries the current status for diagnostics.
    #[error("cannot {operation} event with status {status}")]
    InvalidStateTransition {
        /// The lifecycle operation that was attempted.
        operation: &'static str,
        /// The status the aggregate was in at the time.
        status: String,
    },

    /// An aggregate was not found.
    #[error("event not found: {0}")]
    NotFound(Uuid),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
