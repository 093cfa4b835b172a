//! # Client Configuration
//!
//! Tunables for the account client and its logging. The program id is not
//! here: it is a compile-time constant.

use serde::{Deserialize, Serialize};
use std::env;

/// Largest batch most ledger RPC endpoints accept in one multi-account read.
pub const DEFAULT_MAX_BATCH_SIZE: usize = 100;

/// Default number of batches resolved concurrently.
pub const DEFAULT_FETCH_CONCURRENCY: usize = 4;

/// Account client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Maximum addresses per storage batch read (default: 100).
    pub max_batch_size: usize,

    /// Batches in flight at once during `fetch_many` (default: 4).
    pub fetch_concurrency: usize,

    /// Log level filter (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON formatted logs.
    pub json_logs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            fetch_concurrency: DEFAULT_FETCH_CONCURRENCY,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Small batches so tests exercise chunking.
    pub fn for_testing() -> Self {
        Self {
            max_batch_size: 2,
            fetch_concurrency: 2,
            log_level: "debug".to_string(),
            json_logs: false,
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `DIP_MAX_BATCH_SIZE`: addresses per batch read (default: 100)
    /// - `DIP_FETCH_CONCURRENCY`: batches in flight (default: 4)
    /// - `DIP_LOG_LEVEL` or `RUST_LOG`: log level (default: info)
    /// - `DIP_JSON_LOGS`: JSON log output (default: false)
    ///
    /// Unparseable numbers fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_batch_size: env::var("DIP_MAX_BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_batch_size),

            fetch_concurrency: env::var("DIP_FETCH_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fetch_concurrency),

            log_level: env::var("DIP_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: env::var("DIP_JSON_LOGS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.json_logs),
        }
    }

    pub fn with_max_batch_size(mut self, size: usize) -> Self {
        self.max_batch_size = size;
        self
    }

    pub fn with_fetch_concurrency(mut self, concurrency: usize) -> Self {
        self.fetch_concurrency = concurrency;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Reject values that would stall `fetch_many`.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_batch_size == 0 {
            return Err("max_batch_size must be at least 1".to_string());
        }
        if self.fetch_concurrency == 0 {
            return Err("fetch_concurrency must be at least 1".to_string());
        }
        Ok(())
    }
}
