//! Users domain module.
//!
//! The sole resource of the service: an ordered in-memory collection of
//! users plus the four operations over it (list, create, update, delete).
//!
//! - `model.rs` - the User entity
//! - `service.rs` - the collection and its operations
//! - `handlers.rs` - HTTP handlers and response envelopes
//! - `error.rs` - domain error types

pub mod error;
pub mod handlers;
pub mod model;
pub mod service;

pub use error::UserError;
pub use model::User;
pub use service::UserService;
