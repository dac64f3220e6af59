pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Standard error response structure.
///
/// Every error the service generates is rendered as a JSON object with a
/// single `error` field holding a human-readable message:
///
/// ```json
/// {
///   "error": "Product not found"
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Application error type that can be converted to HTTP responses.
///
/// Client-caused errors (bad request, not found) carry their message through
/// to the response body. Server-side failures log the detail and respond with
/// a generic message so internals never leak to clients.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                // Missing or mistyped body fields map to 400, not axum's
                // default 422.
                let status = match &e {
                    JsonRejection::JsonDataError(_) => StatusCode::BAD_REQUEST,
                    _ => e.status(),
                };
                (status, e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {:?}", e);
                (StatusCode::BAD_REQUEST, validation_message(&e))
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::Database(detail) => {
                tracing::error!("Database error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    messages::DATABASE_ERROR.to_string(),
                )
            }
            AppError::InternalServerError(detail) => {
                tracing::error!("Internal server error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    messages::INTERNAL_ERROR.to_string(),
                )
            }
        };

        error_response(status, message)
    }
}

/// Flatten validator errors into a single readable message.
///
/// Field-level messages declared on the DTO take precedence; fields without
/// a message fall back to `field: code`. Parts are sorted so the output is
/// stable regardless of field iteration order.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            match &error.message {
                Some(message) => parts.push(message.to_string()),
                None => parts.push(format!("{}: {}", field, error.code)),
            }
        }
    }

    parts.sort();
    parts.join(", ")
}

/// Build an error response with the standard single-field body.
pub fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorResponse { error: message })).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "name must be a non-empty string"))]
        name: String,
        #[validate(range(min = 0.0, message = "price must be a non-negative number"))]
        price: f64,
    }

    #[test]
    fn test_error_response_serializes_single_field() {
        let body = serde_json::to_value(ErrorResponse {
            error: "Product not found".to_string(),
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({ "error": "Product not found" }));
    }

    #[test]
    fn test_validation_message_uses_field_message() {
        let sample = Sample {
            name: String::new(),
            price: 1.0,
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(validation_message(&errors), "name must be a non-empty string");
    }

    #[test]
    fn test_validation_message_joins_multiple_fields() {
        let sample = Sample {
            name: String::new(),
            price: -1.0,
        };
        let errors = sample.validate().unwrap_err();

        assert_eq!(
            validation_message(&errors),
            "name must be a non-empty string, price must be a non-negative number"
        );
    }
}
