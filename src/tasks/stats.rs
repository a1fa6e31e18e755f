//! Sweep Statistics Module
//!
//! Tracks expiry sweep outcomes across the lifetime of the process.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::SweepError;
use crate::tasks::SweepReport;

// == Sweep Stats ==
/// Cumulative sweep counters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SweepStats {
    /// Sweeps that reached the store (completed + failed)
    pub runs: u64,
    /// Sweeps that finished without error
    pub completed: u64,
    /// Sweeps aborted by a store error
    pub failed: u64,
    /// Sweeps skipped because another was still in flight
    pub skipped: u64,
    /// Users rewritten across all completed sweeps
    pub users_updated: u64,
    /// Items removed across all completed sweeps
    pub items_removed: u64,
    /// Sweep time of the most recent run
    pub last_run_at: Option<DateTime<Utc>>,
    /// Message of the most recent failure
    pub last_error: Option<String>,
}

impl SweepStats {
    // == Constructor ==
    /// Creates a new SweepStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Success Rate ==
    /// Returns completed / runs, or 0.0 if nothing has run yet.
    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.completed as f64 / self.runs as f64
        }
    }

    // == Record Completed ==
    /// Folds a finished sweep into the counters.
    pub fn record_completed(&mut self, report: &SweepReport) {
        self.runs += 1;
        self.completed += 1;
        self.users_updated += report.users_updated as u64;
        self.items_removed += report.items_removed as u64;
        self.last_run_at = Some(report.swept_at);
    }

    // == Record Failed ==
    /// Counts a failed sweep and keeps its message.
    pub fn record_failed(&mut self, err: &SweepError, swept_at: DateTime<Utc>) {
        self.runs += 1;
        self.failed += 1;
        self.last_run_at = Some(swept_at);
        self.last_error = Some(err.to_string());
    }

    // == Record Skipped ==
    /// Counts a sweep that never started.
    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }
}
