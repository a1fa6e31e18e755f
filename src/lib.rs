//! Inventory Expiry - scheduled inventory cleanup for the ecosystem backend
//!
//! Sweeps expired, non-permanent inventory items out of stored user records
//! on a fixed cadence, and provides structured economy event logging.

pub mod api;
pub mod config;
pub mod economy;
pub mod error;
pub mod inventory;
pub mod models;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use economy::log_economy_event;
pub use tasks::spawn_expiry_task;
