use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{AppError, error_response, messages};

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        messages::NOT_FOUND_RESOURCE.to_string(),
    )
}

/// Convert a caught panic into the standard error response.
///
/// Used with `CatchPanicLayer` so a panicking handler produces a well-formed
/// 500 body instead of tearing down the connection.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    AppError::InternalServerError(format!("panic: {detail}")).into_response()
}
