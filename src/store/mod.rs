//! Store Module
//!
//! Persistence seam for user records. The sweeper only needs to find users
//! holding expired items and to save a whole user back.

mod file;
mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::inventory::User;

pub use file::FileUserStore;
pub use memory::MemoryUserStore;

// == User Store Trait ==
/// Document store holding user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns every user with at least one item whose expiry is at or before `now`.
    async fn find_with_expired_items(&self, now: DateTime<Utc>) -> Result<Vec<User>>;

    /// Replaces the stored record for `user.id`.
    async fn save(&self, user: &User) -> Result<()>;
}
