//! Reusable OpenAPI response definitions for the standard error body.

#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

use super::ErrorResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal server error",
    example = json!({ "error": "An internal server error occurred" })
)]
pub struct InternalServerErrorResponse(#[allow(dead_code)] ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Request body failed validation",
    example = json!({ "error": "name must be a non-empty string" })
)]
pub struct BadRequestValidationResponse(#[allow(dead_code)] ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Path parameter is not a valid UUID",
    example = json!({ "error": "Invalid UUID: not-a-uuid" })
)]
pub struct BadRequestUuidResponse(#[allow(dead_code)] ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    example = json!({ "error": "The requested resource was not found" })
)]
pub struct NotFoundResponse(#[allow(dead_code)] ErrorResponse);
