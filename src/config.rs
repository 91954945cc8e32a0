//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

// == Defaults ==
/// Default record TTL in seconds.
///
/// The value the system actually runs with; a single named constant so the
/// TTL cannot drift between code and documentation.
pub const DEFAULT_TTL_SECS: u64 = 5;

/// Default capacity bound on the number of records.
pub const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Default HTTP server port.
pub const DEFAULT_SERVER_PORT: u16 = 8080;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Time-to-live applied to every record, in seconds
    pub ttl_secs: u64,
    /// Maximum number of records the store can hold
    pub max_entries: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Background expiry sweep interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Record TTL in seconds (default: 5)
    /// - `MAX_ENTRIES` - Maximum records (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `SWEEP_INTERVAL` - Sweep frequency in seconds (default: TTL/2, min 1)
    pub fn from_env() -> Self {
        let ttl_secs = env::var("CACHE_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TTL_SECS);

        Self {
            ttl_secs,
            max_entries: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_ENTRIES),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(|| default_sweep_interval(ttl_secs)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl_secs: DEFAULT_TTL_SECS,
            max_entries: DEFAULT_MAX_ENTRIES,
            server_port: DEFAULT_SERVER_PORT,
            sweep_interval: default_sweep_interval(DEFAULT_TTL_SECS),
        }
    }
}

/// Half the TTL, clamped to at least one second.
fn default_sweep_interval(ttl_secs: u64) -> u64 {
    (ttl_secs / 2).max(1)
}
