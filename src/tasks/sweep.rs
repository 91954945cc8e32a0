//! Expiry Sweep Task
//!
//! Background task that periodically purges expired records, bounding
//! memory growth from write-heavy, read-light workloads where lazy expiry
//! alone would leave dead records behind.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::Store;

/// Spawns a background task that periodically purges expired records.
///
/// The task loops forever, sleeping for the configured interval between
/// passes. Each pass takes the store's write lock only for the duration of
/// one purge, so foreground operations are never blocked for more than a
/// single sweep step.
///
/// # Arguments
/// * `store` - Shared reference to the store
/// * `interval_secs` - Seconds between sweep passes
///
/// # Returns
/// A JoinHandle used to abort the task during graceful shutdown.
pub fn spawn_sweep_task(store: Arc<RwLock<Store>>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!("Starting expiry sweep task with interval of {interval_secs} seconds");

        loop {
            tokio::time::sleep(interval).await;

            let purged = {
                let mut store_guard = store.write().await;
                store_guard.purge_expired()
            };

            if purged > 0 {
                info!("Expiry sweep: purged {purged} expired records");
            } else {
                debug!("Expiry sweep: nothing to purge");
            }
        }
    })
}
