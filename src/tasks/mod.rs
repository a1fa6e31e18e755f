//! Background Tasks Module
//!
//! Contains the recurring jobs that run during server operation.
//!
//! # Tasks
//! - Inventory expiry: drops expired non-permanent items on a fixed cadence

mod scheduler;
mod stats;
mod sweeper;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::info;

pub use scheduler::Scheduler;
pub use stats::SweepStats;
pub use sweeper::{ExpirySweeper, SweepOutcome, SweepReport};

/// Starts the inventory expiry job on a fixed cadence.
///
/// Each tick sweeps with the wall-clock time of that tick. The returned
/// [`Scheduler`] owns the job; call [`Scheduler::stop`] during shutdown.
///
/// # Example
/// ```ignore
/// let sweeper = Arc::new(ExpirySweeper::new(Arc::new(MemoryUserStore::new())));
/// let scheduler = spawn_expiry_task(sweeper, 900);
/// // Later, during shutdown:
/// scheduler.stop().await;
/// ```
pub fn spawn_expiry_task(sweeper: Arc<ExpirySweeper>, interval_secs: u64) -> Scheduler {
    info!(
        "Starting inventory expiry task with interval of {} seconds",
        interval_secs
    );

    Scheduler::start(Duration::from_secs(interval_secs.max(1)), move || {
        let sweeper = Arc::clone(&sweeper);
        async move {
            sweeper.sweep(Utc::now()).await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{InventoryItem, User};
    use crate::store::MemoryUserStore;

    #[tokio::test(start_paused = true)]
    async fn test_expiry_task_removes_expired_items() {
        let now = Utc::now();
        let store = MemoryUserStore::with_users([User::new(
            "u1",
            vec![
                InventoryItem::permanent(),
                InventoryItem::expiring_at(now - chrono::Duration::minutes(1)),
            ],
        )]);
        let sweeper = Arc::new(ExpirySweeper::new(Arc::new(store.clone())));

        let scheduler = spawn_expiry_task(sweeper.clone(), 900);

        tokio::time::sleep(Duration::from_secs(901)).await;

        assert_eq!(store.get("u1").await.unwrap().inventory, vec![InventoryItem::permanent()]);
        assert_eq!(sweeper.stats().await.completed, 1);

        scheduler.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiry_task_waits_one_interval() {
        let now = Utc::now();
        let store = MemoryUserStore::with_users([User::new(
            "u1",
            vec![InventoryItem::expiring_at(now - chrono::Duration::minutes(1))],
        )]);
        let sweeper = Arc::new(ExpirySweeper::new(Arc::new(store.clone())));

        let scheduler = spawn_expiry_task(sweeper.clone(), 900);

        tokio::time::sleep(Duration::from_secs(899)).await;
        assert_eq!(sweeper.stats().await.runs, 0);
        assert_eq!(store.get("u1").await.unwrap().inventory.len(), 1);

        scheduler.stop().await;
    }
}
