//! Response DTOs
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::tasks::SweepStats;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct SweepStatsResponse {
    /// Sweeps that reached the store
    pub runs: u64,
    /// Sweeps that finished without error
    pub completed: u64,
    /// Sweeps aborted by a store error
    pub failed: u64,
    /// Sweeps skipped due to overlap
    pub skipped: u64,
    /// Users rewritten so far
    pub users_updated: u64,
    /// Items removed so far
    pub items_removed: u64,
    /// completed / runs
    pub success_rate: f64,
    /// Time of the most recent run
    pub last_run_at: Option<DateTime<Utc>>,
    /// Message of the most recent failure
    pub last_error: Option<String>,
    /// Configured cadence in seconds
    pub interval_secs: u64,
    /// Whether a sweep is running right now
    pub sweeping: bool,
}

impl SweepStatsResponse {
    /// Creates a new SweepStatsResponse from sweep statistics
    pub fn new(stats: SweepStats, interval_secs: u64, sweeping: bool) -> Self {
        Self {
            success_rate: stats.success_rate(),
            runs: stats.runs,
            completed: stats.completed,
            failed: stats.failed,
            skipped: stats.skipped,
            users_updated: stats.users_updated,
            items_removed: stats.items_removed,
            last_run_at: stats.last_run_at,
            last_error: stats.last_error,
            interval_secs,
            sweeping,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
