//! Terminal user notifications for completed operations.
//!
//! The page shell owns pending/in-flight presentation; the engine reports
//! one terminal [`Notice`] per completion, success or error.

use crate::operation::Operation;

/// Severity of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The operation completed and the store was updated.
    Success,
    /// The operation failed and the store was left untouched.
    Error,
}

/// A single user-facing notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Whether the operation succeeded.
    pub severity: Severity,
    /// Display text for the notification surface.
    pub message: String,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Success notice with the standard wording for an operation.
    #[must_use]
    pub fn for_success(operation: Operation) -> Self {
        Self::success(operation.success_message())
    }

    /// Error notice with the standard wording for an operation.
    #[must_use]
    pub fn for_failure(operation: Operation) -> Self {
        Self::error(operation.failure_message())
    }

    /// Returns true if this is an error notice.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
