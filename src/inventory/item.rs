//! Inventory Item Module
//!
//! Defines a single inventory entry and its retention rule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Inventory Item ==
/// A single entry in a user's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Identifier assigned by the purchase or reward flow that created the item
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// Free-form item kind (badge, frame, boost, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Permanent items never expire
    #[serde(default)]
    pub permanent: bool,
    /// Expiration time, None = no expiration set
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl InventoryItem {
    // == Constructors ==
    /// Creates a permanent item.
    pub fn permanent() -> Self {
        Self {
            permanent: true,
            ..Self::default()
        }
    }

    /// Creates a non-permanent item expiring at `expires_at`.
    pub fn expiring_at(expires_at: DateTime<Utc>) -> Self {
        Self {
            expires_at: Some(expires_at),
            ..Self::default()
        }
    }

    /// Sets the item identifier.
    pub fn with_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    // == Is Retained ==
    /// Checks whether the item survives a sweep run at `now`.
    ///
    /// Boundary condition: an item expiring exactly at `now` is expired.
    ///
    /// # Returns
    /// - `true` if the item is permanent
    /// - `true` if the item expires strictly after `now`
    /// - `false` otherwise, including non-permanent items without an expiry
    pub fn is_retained(&self, now: DateTime<Utc>) -> bool {
        self.permanent || self.expires_at.is_some_and(|expires| expires > now)
    }

    // == Is Due ==
    /// Checks whether the item has an expiry at or before `now`.
    ///
    /// This is the store-side selection predicate and ignores `permanent`.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires| expires <= now)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_permanent_item_is_retained() {
        let now = Utc::now();
        assert!(InventoryItem::permanent().is_retained(now));
    }

    #[test]
    fn test_permanent_item_with_past_expiry_is_retained() {
        let now = Utc::now();
        let item = InventoryItem {
            permanent: true,
            expires_at: Some(now - Duration::hours(1)),
            ..InventoryItem::default()
        };

        assert!(item.is_retained(now));
        assert!(item.is_due(now));
    }

    #[test]
    fn test_future_item_is_retained() {
        let now = Utc::now();
        let item = InventoryItem::expiring_at(now + Duration::seconds(1));
        assert!(item.is_retained(now));
        assert!(!item.is_due(now));
    }

    #[test]
    fn test_past_item_is_dropped() {
        let now = Utc::now();
        let item = InventoryItem::expiring_at(now - Duration::seconds(1));
        assert!(!item.is_retained(now));
        assert!(item.is_due(now));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Utc::now();
        let item = InventoryItem::expiring_at(now);

        assert!(!item.is_retained(now), "Item should be expired at boundary");
        assert!(item.is_due(now));
    }

    #[test]
    fn test_item_without_expiry_or_permanence_is_dropped() {
        let item = InventoryItem::default();
        assert!(!item.is_retained(Utc::now()));
        assert!(!item.is_due(Utc::now()));
    }

    #[test]
    fn test_item_deserialize_camel_case() {
        let json = r#"{"itemId":"frame-7","permanent":false,"expiresAt":"2026-01-01T00:00:00Z"}"#;
        let item: InventoryItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.item_id.as_deref(), Some("frame-7"));
        assert!(!item.permanent);
        assert_eq!(
            item.expires_at.unwrap().to_rfc3339(),
            "2026-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_item_deserialize_defaults() {
        let item: InventoryItem = serde_json::from_str("{}").unwrap();
        assert_eq!(item, InventoryItem::default());
    }

    #[test]
    fn test_item_serialize_null_expiry() {
        let json = serde_json::to_string(&InventoryItem::permanent()).unwrap();
        assert!(json.contains(r#""permanent":true"#));
        assert!(json.contains(r#""expiresAt":null"#));
        assert!(!json.contains("itemId"));
    }
}
