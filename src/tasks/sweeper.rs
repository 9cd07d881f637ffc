//! Expiry Sweeper Task
//!
//! Background task that periodically removes expired cache entries.
//!
//! Lazy expiry alone never reclaims keys nobody reads again; the sweeper
//! exists to free that memory. It runs independently of the byte budget
//! and touches recency order only to detach removed entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

// == Sweeper Handle ==
/// Handle to the running sweeper task.
///
/// Stopping is idempotent: `stop` may be called any number of times,
/// including after the task has already finished. A stopped sweeper does
/// not flush pending work; expiry is then enforced lazily only.
#[derive(Debug)]
pub struct Sweeper {
    handle: JoinHandle<()>,
}

impl Sweeper {
    /// Cancels the sweep loop.
    pub fn stop(&self) {
        self.handle.abort();
    }

    /// Returns true once the sweep loop has exited.
    pub fn is_stopped(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns a background task that periodically removes expired entries.
///
/// The task sleeps for `sweep_interval_ms` between passes. Each pass
/// acquires the write lock for its whole duration, so a sweep is atomic
/// with respect to foreground operations.
///
/// # Arguments
/// * `cache` - Shared reference to the cache store
/// * `sweep_interval_ms` - Interval in milliseconds between passes
pub fn spawn_sweeper(cache: Arc<RwLock<CacheStore>>, sweep_interval_ms: u64) -> Sweeper {
    let interval = Duration::from_millis(sweep_interval_ms);

    let handle = tokio::spawn(async move {
        info!(
            "Starting expiry sweeper with interval of {} ms",
            sweep_interval_ms
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.sweep_expired()
            };

            if removed > 0 {
                info!("Expiry sweep: removed {} expired entries", removed);
            } else {
                debug!("Expiry sweep: no expired entries found");
            }
        }
    });

    Sweeper { handle }
}
