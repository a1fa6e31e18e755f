//! User Module
//!
//! User records as stored in the document store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::inventory::InventoryItem;

// == User ==
/// A user record with its inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: String,
    /// Ordered inventory
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

impl User {
    /// Creates a user with the given inventory.
    pub fn new(id: impl Into<String>, inventory: Vec<InventoryItem>) -> Self {
        Self {
            id: id.into(),
            inventory,
        }
    }

    // == Has Due Items ==
    /// Returns true if any item has an expiry at or before `now`.
    pub fn has_due_items(&self, now: DateTime<Utc>) -> bool {
        self.inventory.iter().any(|item| item.is_due(now))
    }

    // == Drop Expired ==
    /// Removes every item not retained at `now`, preserving order.
    ///
    /// Returns the number of items removed.
    pub fn drop_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.inventory.len();
        self.inventory.retain(|item| item.is_retained(now));
        before - self.inventory.len()
    }
}
