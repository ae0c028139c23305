//! Shared application state.
//!
//! Generated traces are kept in a [`DashMap`] keyed by fingerprint so clients
//! can replay a run by id. Handlers never hold a map guard across an await.
//! The cache is bounded both by entry count and by the total snapshot cells
//! held, since one trace can be orders of magnitude larger than another.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;

use algoviz_core::{Algorithm, GeneratedTrace};

use crate::config::ServerConfig;

/// A trace retained for replay.
#[derive(Debug, Clone)]
pub struct StoredTrace {
    pub algorithm: Algorithm,
    pub trace: GeneratedTrace,
}

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub traces: Arc<DashMap<String, StoredTrace>>,
    /// Snapshot cells held by `traces`.
    cached_cells: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        AppState {
            config: Arc::new(config),
            traces: Arc::new(DashMap::new()),
            cached_cells: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Stores a trace under its fingerprint unless the cache is full.
    ///
    /// Fingerprints cover the algorithm and every step, so a fingerprint that
    /// is already stored names the same trace and is left as is.
    pub fn remember(&self, fingerprint: &str, stored: StoredTrace) -> bool {
        if self.traces.contains_key(fingerprint) {
            return true;
        }
        if self.traces.len() >= self.config.max_cached {
            tracing::debug!(fingerprint, "trace cache full, not retaining");
            return false;
        }

        let cells = stored.trace.snapshot_cells();
        let budget = self.config.max_cached_cells;
        let reserved = self
            .cached_cells
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |used| {
                used.checked_add(cells).filter(|&total| total <= budget)
            });
        if reserved.is_err() {
            tracing::debug!(fingerprint, cells, "trace cache size budget spent, not retaining");
            return false;
        }

        if self.traces.insert(fingerprint.to_string(), stored).is_some() {
            // A concurrent request stored the same trace first.
            self.cached_cells.fetch_sub(cells, Ordering::SeqCst);
        }
        true
    }

    pub fn recall(&self, fingerprint: &str) -> Option<StoredTrace> {
        self.traces.get(fingerprint).map(|entry| entry.value().clone())
    }

    /// Snapshot cells currently held by the cache.
    pub fn cached_cells(&self) -> u64 {
        self.cached_cells.load(Ordering::SeqCst)
    }
}
