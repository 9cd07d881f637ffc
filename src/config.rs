//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// `max_bytes` and `sweep_interval_ms` are the only engine tunables; the port
/// belongs to the HTTP boundary layer.
#[derive(Debug, Clone)]
pub struct Config {
    /// Total byte budget for stored values
    pub max_bytes: usize,
    /// Background expiry sweep interval in milliseconds
    pub sweep_interval_ms: u64,
    /// HTTP server port
    pub server_port: u16,
}

/// Default byte budget: 64 MiB.
pub const DEFAULT_MAX_BYTES: usize = 64 * 1024 * 1024;

/// Default sweep interval: 1 second.
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 1000;

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_BYTES` - Total byte budget for values (default: 67108864, i.e. 64 MiB)
    /// - `SWEEP_INTERVAL_MS` - Expiry sweep frequency in milliseconds (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            max_bytes: env::var("MAX_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_BYTES),
            sweep_interval_ms: env::var("SWEEP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SWEEP_INTERVAL_MS),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL_MS,
            server_port: 3000,
        }
    }
}
