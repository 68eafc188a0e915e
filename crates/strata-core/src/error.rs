//! Unified error type for the data-access and use-case layers.

use thiserror::Error;

/// Unified error type for Strata.
///
/// A lookup can fail because the row does not exist, because the backend
/// failed, or because the caller's [`RequestContext`](crate::RequestContext)
/// ended the call early. The layered wiring keeps these apart; the legacy
/// wiring collapses all of them into a zero-valued record.
#[derive(Error, Debug)]
pub enum StrataError {
    // ============ Lookup Errors ============
    /// No row matched the requested key.
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Storage backend error.
    #[error("Database error: {0}")]
    Database(String),

    // ============ Context Errors ============
    /// The request context was cancelled before the call completed.
    #[error("Operation cancelled")]
    Cancelled,

    /// The request context deadline elapsed before the call completed.
    #[error("Deadline exceeded")]
    DeadlineExceeded,

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl StrataError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Cancelled => "CANCELLED",
            Self::DeadlineExceeded => "DEADLINE_EXCEEDED",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a database error.
    #[must_use]
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error means "no such row".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Checks if the caller's context ended the call.
    #[must_use]
    pub const fn is_context_error(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }

    /// Checks if this error is retriable.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Database(_) | Self::DeadlineExceeded)
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for StrataError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Configuration(_) => Self::Configuration(err.to_string()),
            _ => Self::Database(err.to_string()),
        }
    }
}
