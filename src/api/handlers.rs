//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::config::Config;
use crate::models::{HealthResponse, SweepStatsResponse};
use crate::store::UserStore;
use crate::tasks::ExpirySweeper;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared sweeper, also driven by the background scheduler
    pub sweeper: Arc<ExpirySweeper>,
    /// Configured sweep cadence in seconds
    pub sweep_interval: u64,
}

impl AppState {
    /// Creates a new AppState around an existing sweeper.
    pub fn new(sweeper: Arc<ExpirySweeper>, sweep_interval: u64) -> Self {
        Self {
            sweeper,
            sweep_interval,
        }
    }

    /// Creates a new AppState from configuration and a user store.
    pub fn from_config(config: &Config, store: Arc<dyn UserStore>) -> Self {
        Self::new(Arc::new(ExpirySweeper::new(store)), config.sweep_interval)
    }
}

/// Handler for GET /stats
///
/// Returns cumulative expiry sweep statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<SweepStatsResponse> {
    let stats = state.sweeper.stats().await;
    Json(SweepStatsResponse::new(
        stats,
        state.sweep_interval,
        state.sweeper.is_sweeping(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::{InventoryItem, User};
    use crate::store::MemoryUserStore;
    use chrono::{Duration, Utc};

    #[tokio::test]
    async fn test_stats_handler_initial() {
        let state = AppState::from_config(&Config::default(), Arc::new(MemoryUserStore::new()));

        let response = stats_handler(State(state)).await;
        assert_eq!(response.runs, 0);
        assert_eq!(response.interval_secs, 900);
        assert!(!response.sweeping);
    }

    #[tokio::test]
    async fn test_stats_handler_after_sweep() {
        let now = Utc::now();
        let store = MemoryUserStore::with_users([User::new(
            "u1",
            vec![InventoryItem::expiring_at(now - Duration::minutes(5))],
        )]);
        let state = AppState::from_config(&Config::default(), Arc::new(store));
        state.sweeper.sweep(now).await;

        let response = stats_handler(State(state)).await;
        assert_eq!(response.runs, 1);
        assert_eq!(response.items_removed, 1);
        assert_eq!(response.users_updated, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
