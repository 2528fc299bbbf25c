//! The user entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user record held in the in-memory collection.
///
/// The `id` is assigned by the server at creation time and never changes;
/// only the `name` can be rewritten afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Server-assigned identifier (milliseconds since the Unix epoch at
    /// creation, bumped to stay strictly increasing).
    pub id: u64,

    /// Display name. Never empty once stored.
    pub name: String,
}

impl User {
    /// Create a user record.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
