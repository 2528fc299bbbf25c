//! HTTP server implementation.
//!
//! Builds the axum router over the user service and runs the listener.
//! Requests are validated by the typed extractors (path ids, form bodies)
//! before they reach the service; anything that matches no route or method
//! falls through to the not-found envelope.

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::config::HttpConfig;
use super::doc::{ApiDoc, openapi_doc};
use super::error::{Error, Result};
use crate::domains::users::{UserService, handlers};

/// Application state shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The user service owning the in-memory collection.
    pub users: UserService,
}

/// HTTP server handler.
pub struct HttpServer {
    config: HttpConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the application router.
    ///
    /// Exposed separately so integration tests can drive the router without
    /// binding a socket.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::list_users).post(handlers::create_user))
            .route(
                "/{id}",
                put(handlers::update_user).delete(handlers::delete_user),
            )
            .route("/doc", get(openapi_doc))
            .merge(Scalar::with_url("/ui", ApiDoc::openapi()))
            .fallback(handlers::not_found)
            .method_not_allowed_fallback(handlers::not_found)
            .with_state(state)
    }

    /// Run the HTTP server until the listener stops.
    pub async fn run(self, users: UserService) -> Result<()> {
        let addr = self.address();

        let mut app = Self::router(AppState { users });

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Users:    GET/POST /  PUT/DELETE /{{id}}");
        info!("  → OpenAPI:  GET /doc");
        info!("  → Explorer: GET /ui");

        axum::serve(listener, app).await?;

        Ok(())
    }
}
