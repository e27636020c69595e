//! Error types for the Menhir engine.
//!
//! Uses `thiserror` for ergonomic error definition with operation context.

use thiserror::Error;

use crate::entity::EntityKind;
use crate::operation::Operation;

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Menhir operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// The remote operation the error belongs to, if known.
    pub operation: Option<Operation>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            operation: None,
        }
    }

    /// Attaches the remote operation the error belongs to.
    #[must_use]
    pub fn with_operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Creates a network failure error (the call did not complete).
    #[must_use]
    pub fn network_failure(detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::NetworkFailure(detail.into()))
    }

    /// Creates a shape mismatch error (a payload failed validation).
    #[must_use]
    pub fn shape_mismatch(payload: &'static str, detail: impl Into<String>) -> Self {
        Self::new(ErrorKind::ShapeMismatch {
            payload,
            detail: detail.into(),
        })
    }

    /// Creates a not-found error (an id lookup against the store failed).
    #[must_use]
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound {
            kind,
            id: id.into(),
        })
    }

    /// Returns true if this is a not-found error.
    ///
    /// Not-found is non-fatal during edit-target resolution and callers
    /// routinely branch on it.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The remote call did not complete.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// An inbound payload failed shape validation at the boundary.
    #[error("shape mismatch in {payload}: {detail}")]
    ShapeMismatch {
        /// Which payload was being validated.
        payload: &'static str,
        /// What the decoder rejected.
        detail: String,
    },

    /// An id lookup against the current store found nothing.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// The record kind that was looked up.
        kind: EntityKind,
        /// The id that was not present.
        id: String,
    },
}
