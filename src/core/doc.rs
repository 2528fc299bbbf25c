//! OpenAPI documentation assembly.
//!
//! The API description is derived from the same handler annotations and
//! schema types the router validates requests with, so the served document
//! never drifts from the runtime behavior. `/doc` returns the raw OpenAPI
//! JSON; `/ui` serves an interactive explorer backed by the same document.

use axum::Json;
use utoipa::OpenApi;

use crate::domains::users::handlers::{ErrorResponse, UserForm, UserResponse, UsersListResponse};
use crate::domains::users::model::User;

/// Public OpenAPI surface used by the explorer UI and tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "users-api",
        description = "Minimal in-memory CRUD API for a single user resource."
    ),
    paths(
        crate::domains::users::handlers::list_users,
        crate::domains::users::handlers::create_user,
        crate::domains::users::handlers::update_user,
        crate::domains::users::handlers::delete_user,
    ),
    components(schemas(User, UserForm, UsersListResponse, UserResponse, ErrorResponse)),
    tags((name = "users", description = "Operations over the user collection"))
)]
pub struct ApiDoc;

/// GET /doc — the machine-readable API description.
pub async fn openapi_doc() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
