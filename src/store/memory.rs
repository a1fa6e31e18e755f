//! In-Memory User Store
//!
//! HashMap-backed store shared behind a tokio RwLock.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::Result;
use crate::inventory::User;
use crate::store::UserStore;

// == Memory User Store ==
/// User store kept entirely in process memory.
///
/// Cloning yields another handle onto the same records.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `users`.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users = users
            .into_iter()
            .map(|user| (user.id.clone(), user))
            .collect();
        Self {
            users: Arc::new(RwLock::new(users)),
        }
    }

    /// Inserts or replaces a user.
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id.clone(), user);
    }

    /// Returns a copy of the user with `id`, if present.
    pub async fn get(&self, id: &str) -> Option<User> {
        self.users.read().await.get(id).cloned()
    }

    /// Returns the number of stored users.
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Returns true if no users are stored.
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Returns copies of all users, ordered by id.
    pub async fn snapshot(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| a.id.cmp(&b.id));
        users
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_with_expired_items(&self, now: DateTime<Utc>) -> Result<Vec<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .filter(|user| user.has_due_items(now))
            .cloned()
            .collect())
    }

    async fn save(&self, user: &User) -> Result<()> {
        self.users
            .write()
            .await
            .insert(user.id.clone(), user.clone());
        Ok(())
    }
}
