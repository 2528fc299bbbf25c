//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the service,
//! including error handling, configuration, the HTTP server, and the OpenAPI
//! documentation assembly.

pub mod config;
pub mod doc;
pub mod error;
pub mod http;

pub use config::Config;
pub use doc::ApiDoc;
pub use error::{Error, Result};
pub use http::{AppState, HttpServer};
