//! Unified application error types for Roomly.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Per-field validation messages, keyed by request field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Input validation failed on one or more request fields.
    Validation,
    /// The request was well-formed but cannot be processed (e.g. bad credentials).
    BadRequest,
    /// Authentication failed (missing, invalid, or revoked token).
    Authentication,
    /// The caller is authenticated but lacks the required role.
    Authorization,
    /// The requested resource was not found.
    NotFound,
    /// A conflict occurred (duplicate entry, concurrent modification).
    Conflict,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => write!(f, "VALIDATION"),
            Self::BadRequest => write!(f, "BAD_REQUEST"),
            Self::Authentication => write!(f, "AUTHENTICATION"),
            Self::Authorization => write!(f, "AUTHORIZATION"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Roomly.
///
/// All crate-specific errors are mapped into `AppError` using explicit
/// `.map_err()` calls at the boundary where they occur. This provides a
/// single error type for the entire application.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Per-field validation messages, present only for field-scoped
    /// validation failures.
    pub fields: Option<FieldErrors>,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: None,
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error scoped to a single request field.
    pub fn field_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut fields = FieldErrors::new();
        fields.insert(field.into(), vec![message.into()]);
        Self::field_validations(fields)
    }

    /// Create a validation error from an already-built field error map.
    pub fn field_validations(fields: FieldErrors) -> Self {
        Self {
            kind: ErrorKind::Validation,
            message: "Request validation failed".to_string(),
            fields: Some(fields),
            source: None,
        }
    }

    /// Create a bad-request error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, message)
    }

    /// Create an authorization error.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Whether this error is a 500-class fault whose detail must stay
    /// server-side.
    pub fn is_internal(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal
        )
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            fields: self.fields.clone(),
            source: None,
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_validation_shape() {
        let err = AppError::field_validation("open_time", "open_time must be lower than close_time");
        assert_eq!(err.kind, ErrorKind::Validation);
        let fields = err.fields.expect("field errors present");
        assert_eq!(
            fields.get("open_time").map(Vec::as_slice),
            Some(&["open_time must be lower than close_time".to_string()][..])
        );
    }

    #[test]
    fn test_internal_classification() {
        assert!(AppError::database("boom").is_internal());
        assert!(AppError::internal("boom").is_internal());
        assert!(!AppError::authentication("no").is_internal());
        assert!(!AppError::bad_request("no").is_internal());
    }
}
