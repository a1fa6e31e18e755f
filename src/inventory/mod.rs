//! Inventory Module
//!
//! User records and the inventory items the expiry sweep operates on.

mod item;
mod user;


pub use item::InventoryItem;
pub use user::User;
