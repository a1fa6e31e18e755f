//! Inventory Expiry Sweeper
//!
//! One sweep loads users holding expired items, drops every item that is
//! neither permanent nor still in date, and saves each changed user back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::error::SweepError;
use crate::store::UserStore;
use crate::tasks::SweepStats;

// == Sweep Report ==
/// Summary of a completed sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// The `now` the sweep ran with
    pub swept_at: DateTime<Utc>,
    /// Users returned by the store query
    pub users_scanned: usize,
    /// Users saved with a smaller inventory
    pub users_updated: usize,
    /// Items removed across all users
    pub items_removed: usize,
}

impl SweepReport {
    fn new(swept_at: DateTime<Utc>) -> Self {
        Self {
            swept_at,
            users_scanned: 0,
            users_updated: 0,
            items_removed: 0,
        }
    }
}

// == Sweep Outcome ==
/// Result of a single call to [`ExpirySweeper::sweep`].
#[derive(Debug)]
pub enum SweepOutcome {
    /// The sweep ran to the end
    Completed(SweepReport),
    /// The sweep stopped at the first store error
    Failed(SweepError),
    /// Another sweep was still in flight, nothing was done
    Skipped,
}

impl SweepOutcome {
    /// Returns the report of a completed sweep.
    pub fn report(&self) -> Option<&SweepReport> {
        match self {
            SweepOutcome::Completed(report) => Some(report),
            _ => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, SweepOutcome::Completed(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, SweepOutcome::Skipped)
    }
}

// == Expiry Sweeper ==
/// Removes expired, non-permanent inventory items from stored users.
pub struct ExpirySweeper {
    store: Arc<dyn UserStore>,
    in_flight: AtomicBool,
    stats: RwLock<SweepStats>,
}

impl ExpirySweeper {
    /// Creates a sweeper over `store`.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self {
            store,
            in_flight: AtomicBool::new(false),
            stats: RwLock::new(SweepStats::new()),
        }
    }

    // == Sweep ==
    /// Runs one sweep at `now`.
    ///
    /// Never panics on store errors: failures are logged, counted and
    /// returned as [`SweepOutcome::Failed`]. A save failure leaves the
    /// remaining users for the next sweep. Returns
    /// [`SweepOutcome::Skipped`] without touching the store while a previous
    /// sweep on this sweeper is still running.
    pub async fn sweep(&self, now: DateTime<Utc>) -> SweepOutcome {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            warn!("Expiry sweep skipped: previous sweep still in progress");
            self.stats.write().await.record_skipped();
            return SweepOutcome::Skipped;
        };

        match self.run(now).await {
            Ok(report) => {
                if report.items_removed > 0 {
                    info!(
                        "Expiry sweep: removed {} expired items from {} users",
                        report.items_removed, report.users_updated
                    );
                } else {
                    debug!("Expiry sweep: no expired items found");
                }
                self.stats.write().await.record_completed(&report);
                SweepOutcome::Completed(report)
            }
            Err(err) => {
                error!("Expiry sweep failed: {}", err);
                self.stats.write().await.record_failed(&err, now);
                SweepOutcome::Failed(err)
            }
        }
    }

    async fn run(&self, now: DateTime<Utc>) -> Result<SweepReport, SweepError> {
        let users = self
            .store
            .find_with_expired_items(now)
            .await
            .map_err(SweepError::Query)?;

        let mut report = SweepReport::new(now);
        report.users_scanned = users.len();

        for mut user in users {
            let removed = user.drop_expired(now);
            if removed == 0 {
                continue;
            }

            self.store
                .save(&user)
                .await
                .map_err(|source| SweepError::Save {
                    user_id: user.id.clone(),
                    source,
                })?;

            debug!("Removed {} expired items from user {}", removed, user.id);
            report.users_updated += 1;
            report.items_removed += removed;
        }

        Ok(report)
    }

    // == Stats ==
    /// Returns cumulative sweep statistics.
    pub async fn stats(&self) -> SweepStats {
        self.stats.read().await.clone()
    }

    /// Returns true while a sweep is running.
    pub fn is_sweeping(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

// == In-Flight Guard ==
/// Holds the sweeper's in-flight flag; released on drop, including unwinding.
struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
