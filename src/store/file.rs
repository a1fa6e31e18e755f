//! File-Backed User Store
//!
//! Keeps the records in memory and writes the full set back to a JSON file
//! after every save.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::Result;
use crate::inventory::User;
use crate::store::{MemoryUserStore, UserStore};

// == File User Store ==
/// User store persisted as a JSON array of users.
#[derive(Debug)]
pub struct FileUserStore {
    path: PathBuf,
    records: MemoryUserStore,
    /// Serializes snapshot writes so renames land in save order
    write_lock: Mutex<()>,
}

impl FileUserStore {
    // == Open ==
    /// Loads the store from `path`. A missing file yields an empty store.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let users: Vec<User> = match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };

        info!("Loaded {} users from {}", users.len(), path.display());

        Ok(Self {
            path,
            records: MemoryUserStore::with_users(users),
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a copy of the user with `id`, if present.
    pub async fn get(&self, id: &str) -> Option<User> {
        self.records.get(id).await
    }

    /// Inserts or replaces a user and persists the snapshot.
    pub async fn insert(&self, user: User) -> Result<()> {
        self.save(&user).await
    }

    /// Writes the snapshot with `user` applied, then commits `user` to memory.
    ///
    /// A failed write leaves memory untouched, so the next query still sees
    /// the old record.
    async fn persist_with(&self, user: &User) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.records.snapshot().await;
        match users.iter_mut().find(|existing| existing.id == user.id) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }

        let bytes = serde_json::to_vec_pretty(&users)?;
        atomic_write(&self.path, &bytes).await?;
        self.records.save(user).await?;
        debug!("Persisted {} users to {}", users.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl UserStore for FileUserStore {
    async fn find_with_expired_items(&self, now: DateTime<Utc>) -> Result<Vec<User>> {
        self.records.find_with_expired_items(now).await
    }

    async fn save(&self, user: &User) -> Result<()> {
        self.persist_with(user).await
    }
}

// == Utility Functions ==
/// Writes `bytes` to a sibling temp file, then renames it over `path`.
async fn atomic_write(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes).await?;
    fs::rename(&tmp, path).await
}
