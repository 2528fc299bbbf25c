//! HTTP handlers for the user resource.
//!
//! Each handler translates a transport-layer request into a [`UserService`]
//! call and serializes the response envelope. The `#[utoipa::path]`
//! annotations on these functions are the single declarative source the
//! documentation generator assembles the OpenAPI description from.

use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use utoipa::ToSchema;

use super::error::UserError;
use super::model::User;
use crate::core::http::AppState;

/// Form body accepted by create and update.
///
/// A missing `name` field is treated as the empty string, which the service
/// then rejects as an invalid name.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UserForm {
    #[serde(default)]
    pub name: String,
}

/// Envelope for the full user listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct UsersListResponse {
    pub success: bool,
    pub users: Vec<User>,
}

/// Envelope for a single created or updated user.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub success: bool,
    pub user: User,
}

/// Envelope for invalid-input and not-found responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

/// GET / — list all users.
#[utoipa::path(
    get,
    path = "/",
    tag = "users",
    responses(
        (status = 200, description = "Full user collection in insertion order", body = UsersListResponse)
    )
)]
#[instrument(skip_all)]
pub async fn list_users(State(state): State<AppState>) -> Json<UsersListResponse> {
    let users = state.users.list().await;
    info!(count = users.len(), "Listing users");

    Json(UsersListResponse {
        success: true,
        users,
    })
}

/// POST / — create a user from a form-encoded name.
#[utoipa::path(
    post,
    path = "/",
    tag = "users",
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "User created with a server-assigned id", body = UserResponse),
        (status = 400, description = "Empty name", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> Result<(StatusCode, Json<UserResponse>), UserError> {
    let user = state.users.create(&form.name).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            success: true,
            user,
        }),
    ))
}

/// PUT /{id} — rename every user matching the id.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User id")),
    request_body(content = UserForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Echo of the submitted id and name; also returned when no record matched", body = UserResponse),
        (status = 400, description = "Empty name", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Form(form): Form<UserForm>,
) -> Result<Json<UserResponse>, UserError> {
    let user = state.users.update(id, &form.name).await?;

    Ok(Json(UserResponse {
        success: true,
        user,
    }))
}

/// DELETE /{id} — remove every user matching the id.
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "users",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "Empty acknowledgement; returned whether or not a record existed", body = Object)
    )
)]
#[instrument(skip_all)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<serde_json::Value> {
    state.users.delete(id).await;

    Json(serde_json::json!({}))
}

/// Fallback for unmatched routes and methods.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            message: "Not found".to_string(),
        }),
    )
}
