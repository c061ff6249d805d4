//! Lazily built, explicitly reloadable timetable index.
//!
//! The index is built on first use and then kept for the life of the
//! process; there is no expiry. `reload` rebuilds from the feed files and
//! swaps the new index in wholesale.
//!
//! Builds are serialized by a mutex so that simultaneous first requests do
//! not each parse the feeds, and the finished index is published behind an
//! `Arc` so readers only ever see a complete index. A failed build publishes
//! nothing: the previous index (or none) stays visible.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use crate::config::FeedConfig;
use crate::feed::FeedError;
use crate::index::{StationIndex, build_index};

/// Holder of the current [`StationIndex`].
pub struct TimetableCache {
    config: FeedConfig,

    /// Published index. `None` until the first successful build.
    index: RwLock<Option<Arc<StationIndex>>>,

    /// Held for the duration of a build.
    build_lock: Mutex<()>,
}

impl TimetableCache {
    /// Create an empty cache. Nothing is read until first use.
    pub fn new(config: FeedConfig) -> Self {
        Self {
            config,
            index: RwLock::new(None),
            build_lock: Mutex::new(()),
        }
    }

    /// Get the index, building it first if none has been published.
    pub async fn ensure_built(&self) -> Result<Arc<StationIndex>, FeedError> {
        if let Some(index) = self.current().await {
            return Ok(index);
        }

        let _guard = self.build_lock.lock().await;

        // Another caller may have finished a build while we waited.
        if let Some(index) = self.current().await {
            return Ok(index);
        }

        self.build_and_publish().await
    }

    /// Rebuild from the feed files and replace the current index.
    ///
    /// On failure the previously published index is left in place and the
    /// error is returned.
    pub async fn reload(&self) -> Result<Arc<StationIndex>, FeedError> {
        let _guard = self.build_lock.lock().await;
        let result = self.build_and_publish().await;
        match &result {
            Ok(index) => info!(stations = index.station_count(), "reloaded station index"),
            Err(e) => warn!(error = %e, "reload failed, keeping previous index"),
        }
        result
    }

    /// The currently published index, without triggering a build.
    pub async fn current(&self) -> Option<Arc<StationIndex>> {
        self.index.read().await.clone()
    }

    /// Whether an index has been published.
    pub async fn is_built(&self) -> bool {
        self.index.read().await.is_some()
    }

    /// Must be called with `build_lock` held.
    async fn build_and_publish(&self) -> Result<Arc<StationIndex>, FeedError> {
        let index = Arc::new(build_index(&self.config)?);
        *self.index.write().await = Some(index.clone());
        Ok(index)
    }
}
