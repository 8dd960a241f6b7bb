//! Unified error type for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for Roster.
///
/// Errors are propagated unchanged from the datastore to the HTTP layer;
/// nothing is retried or recovered locally.
#[derive(Error, Debug)]
pub enum RosterError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Required input missing
    #[error("Validation error: {0}")]
    Validation(String),

    // ============ Infrastructure Errors ============
    /// Unique or not-null constraint rejected by the datastore
    #[error("Integrity error: {0}")]
    Integrity(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RosterError {
    /// Returns the HTTP status code for this error.
    ///
    /// Integrity errors are not translated into a client error: a duplicate
    /// username or email fails the request like any other datastore error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Integrity(_)
            | Self::Database(_)
            | Self::Configuration(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Integrity(_) => "INTEGRITY_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
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

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an integrity error.
    #[must_use]
    pub fn integrity<T: Into<String>>(message: T) -> Self {
        Self::Integrity(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this is a server-side failure.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation
                | sqlx::error::ErrorKind::NotNullViolation => {
                    Self::Integrity(db_err.message().to_string())
                }
                _ => Self::Database(err.to_string()),
            },
            _ => Self::Database(err.to_string()),
        }
    }
}

/// Error payload safe to show to a client.
///
/// Server-side failures carry only a generic message; their details belong
/// in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Message shown in place of any server-side failure.
    pub const SERVER_ERROR_MESSAGE: &'static str = "Internal Server Error";

    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a client-safe response from a `RosterError`.
    #[must_use]
    pub fn from_error(error: &RosterError) -> Self {
        let message = if error.is_server_error() {
            Self::SERVER_ERROR_MESSAGE.to_string()
        } else {
            error.to_string()
        };
        Self::new(error.error_code(), message)
    }
}

impl From<&RosterError> for ErrorResponse {
    fn from(error: &RosterError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(RosterError::not_found("User", 1).status_code(), 404);
        assert_eq!(RosterError::validation("missing email").status_code(), 400);
        assert_eq!(RosterError::integrity("duplicate").status_code(), 500);
        assert_eq!(RosterError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(RosterError::Configuration("bad".to_string()).status_code(), 500);
        assert_eq!(RosterError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(RosterError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(RosterError::validation("x").error_code(), "VALIDATION_ERROR");
        assert_eq!(RosterError::integrity("x").error_code(), "INTEGRITY_ERROR");
        assert_eq!(RosterError::Database("x".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(RosterError::internal("x").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_server_error_classification() {
        assert!(RosterError::integrity("dup").is_server_error());
        assert!(RosterError::Database("down".to_string()).is_server_error());
        assert!(!RosterError::not_found("User", 1).is_server_error());
        assert!(!RosterError::validation("bad").is_server_error());
    }

    #[test]
    fn test_error_constructors() {
        let not_found = RosterError::not_found("User", 123);
        assert!(not_found.to_string().contains("User"));
        assert!(not_found.to_string().contains("123"));

        let integrity = RosterError::integrity("UNIQUE constraint failed: users.username");
        assert!(integrity.to_string().contains("users.username"));
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = RosterError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), 404);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_pool_errors_map_to_database() {
        let err = RosterError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, RosterError::Database(_)));
    }

    #[test]
    fn test_error_response_keeps_client_message() {
        let err = RosterError::not_found("User", 1);
        let response = ErrorResponse::from(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert_eq!(response.message, err.to_string());
    }

    #[test]
    fn test_error_response_hides_server_details() {
        let err = RosterError::integrity("UNIQUE constraint failed: users.email");
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "INTEGRITY_ERROR");
        assert_eq!(response.message, ErrorResponse::SERVER_ERROR_MESSAGE);
        assert!(!response.message.contains("users.email"));
    }
}
