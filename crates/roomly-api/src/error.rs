//! Maps domain `AppError` to HTTP responses.
//!
//! Response envelopes:
//! - field validation: `422 {"status":"error","errors":{field:[messages]}}`
//! - everything else: `{"status":"error","message": ...}`
//!
//! 500-class faults respond with a fixed message; their detail is only
//! logged server-side.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use roomly_core::error::{AppError, ErrorKind, FieldErrors};

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Always `"error"`.
    pub status: &'static str,
    /// Human-readable message.
    pub message: String,
}

/// Field-scoped validation error body.
#[derive(Debug, Clone, Serialize)]
pub struct FieldErrorBody {
    /// Always `"error"`.
    pub status: &'static str,
    /// Per-field messages.
    pub errors: FieldErrors,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!(error = %self, "Internal server error");
        }

        let Self {
            kind,
            message,
            fields,
            ..
        } = self;

        if let Some(errors) = fields {
            let body = FieldErrorBody {
                status: "error",
                errors,
            };
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
        }

        let status = match kind {
            ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::Authorization => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Database | ErrorKind::Configuration | ErrorKind::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Internal server error".to_string()
        } else {
            message
        };

        let body = ErrorBody {
            status: "error",
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::bad_request("x"), StatusCode::BAD_REQUEST),
            (AppError::authentication("x"), StatusCode::UNAUTHORIZED),
            (AppError::authorization("x"), StatusCode::FORBIDDEN),
            (AppError::not_found("x"), StatusCode::NOT_FOUND),
            (AppError::conflict("x"), StatusCode::CONFLICT),
            (AppError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::database("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_field_errors_are_unprocessable() {
        let err = AppError::field_validation("open_time", "open_time must be lower than close_time");
        assert_eq!(
            err.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
