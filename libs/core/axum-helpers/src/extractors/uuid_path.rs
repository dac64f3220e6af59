use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::errors::{AppError, error_response};

/// Path extractor that parses a single `{id}` segment as a UUID.
///
/// A malformed id is a client error, so parse failures respond with 400
/// instead of bubbling up as a server failure later in the request.
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| error_response(e.status(), e.body_text()))?;

        let uuid = Uuid::parse_str(&id)
            .map_err(|_| AppError::BadRequest(format!("Invalid UUID: {}", id)).into_response())?;

        Ok(UuidPath(uuid))
    }
}
