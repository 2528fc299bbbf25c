//! User CRUD API Library
//!
//! A minimal in-memory CRUD HTTP service for a single user resource, with
//! the OpenAPI description generated from the same schemas the router
//! validates requests with.
//!
//! # Architecture
//!
//! - **core**: Infrastructure including configuration, error handling, the
//!   HTTP server, and documentation assembly
//! - **domains**: Business logic organized by bounded contexts
//!   - **users**: the user collection and its four operations

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{AppState, Config, Error, HttpServer, Result};
pub use domains::users::{User, UserError, UserService};
