//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default sweep cadence: 15 minutes.
pub const DEFAULT_SWEEP_INTERVAL: u64 = 15 * 60;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seconds between expiry sweeps
    pub sweep_interval: u64,
    /// HTTP server port
    pub server_port: u16,
    /// JSON file backing the user store; in-memory store when None
    pub user_store_path: Option<PathBuf>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SWEEP_INTERVAL` - Sweep cadence in seconds (default: 900)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `USER_STORE_PATH` - Path of the JSON user store (default: unset, in-memory)
    pub fn from_env() -> Self {
        Self {
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_SWEEP_INTERVAL),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            user_store_path: env::var("USER_STORE_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            server_port: 3000,
            user_store_path: None,
        }
    }
}
