//! User service implementation.
//!
//! The UserService owns the in-memory user collection and implements the four
//! resource operations: list, create, update, delete. The collection is an
//! ordered sequence behind an `RwLock`; each operation holds the lock for its
//! whole scan/mutate pass, so operations never interleave even on a
//! multi-threaded runtime.
//!
//! The service is injected into the HTTP router through axum state rather
//! than captured as ambient global state, so tests can build isolated
//! instances.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use super::error::UserError;
use super::model::User;

/// Service owning and mutating the user collection.
///
/// Cloning is cheap and shares the underlying collection.
#[derive(Clone, Default)]
pub struct UserService {
    inner: Arc<RwLock<Store>>,
}

/// The collection plus the id high-water mark.
#[derive(Default)]
struct Store {
    /// Users in insertion order.
    users: Vec<User>,

    /// Highest id issued so far. Ids are wall-clock milliseconds, bumped
    /// past this mark when the clock has not advanced between creates.
    last_id: u64,
}

impl UserService {
    /// Create a service with an empty collection.
    pub fn new() -> Self {
        info!("Initializing UserService");
        Self::default()
    }

    /// Return the full current sequence of users, in insertion order.
    pub async fn list(&self) -> Vec<User> {
        self.inner.read().await.users.clone()
    }

    /// Create a user with a server-assigned id and append it.
    ///
    /// Fails with [`UserError::InvalidName`] when `name` is empty.
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> Result<User, UserError> {
        if name.is_empty() {
            return Err(UserError::InvalidName);
        }

        let mut store = self.inner.write().await;
        let id = next_id(store.last_id);
        store.last_id = id;

        let user = User::new(id, name);
        store.users.push(user.clone());

        info!(id, "Created user");
        Ok(user)
    }

    /// Rewrite the name of every user whose id matches.
    ///
    /// The id is not validated for existence: when nothing matches, the
    /// operation still succeeds and echoes `{id, name}` back without touching
    /// the collection. Positions and ids are never changed.
    ///
    /// Fails with [`UserError::InvalidName`] when `name` is empty.
    #[instrument(skip(self))]
    pub async fn update(&self, id: u64, name: &str) -> Result<User, UserError> {
        if name.is_empty() {
            return Err(UserError::InvalidName);
        }

        let mut store = self.inner.write().await;
        let mut matched = 0usize;
        for user in store.users.iter_mut().filter(|u| u.id == id) {
            user.name = name.to_string();
            matched += 1;
        }

        info!(id, matched, "Updated user");
        Ok(User::new(id, name))
    }

    /// Remove every user whose id matches. A no-op for unknown ids.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: u64) {
        let mut store = self.inner.write().await;
        let before = store.users.len();
        store.users.retain(|u| u.id != id);

        info!(id, removed = before - store.users.len(), "Deleted user");
    }
}

/// Next identifier: current time in milliseconds, bumped past the previous
/// id when the clock tick has not advanced.
fn next_id(last_id: u64) -> u64 {
    let now = Utc::now().timestamp_millis().max(0) as u64;
    now.max(last_id + 1)
}
