//! User-domain error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors that can occur during user operations.
///
/// Updating or deleting a nonexistent id is deliberately NOT an error; those
/// operations are permissive no-ops. The only business rule is that a user
/// name must be non-empty.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    /// An empty name was submitted on create or update.
    #[error("Invalid name")]
    InvalidName,
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let status = match self {
            UserError::InvalidName => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "success": false,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
