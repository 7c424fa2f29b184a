//! Shared application state.

use std::sync::Arc;

use parking_lot::RwLock;
use rostergraph_core::{Result, RosterGraphConfig};
use rostergraph_query::RosterService;
use rostergraph_store::{GraphStats, GraphStore};
use tracing::info;

/// Shared application state accessible from all route handlers.
///
/// The current snapshot is swapped wholesale on reload. Handlers clone the
/// `Arc` and drop the lock before running a query.
pub struct AppState {
    pub config: RosterGraphConfig,
    service: RwLock<Arc<RosterService>>,
}

impl AppState {
    pub fn new(config: RosterGraphConfig, store: GraphStore) -> Self {
        let service = RosterService::from_config(Arc::new(store), &config);
        Self {
            config,
            service: RwLock::new(Arc::new(service)),
        }
    }

    /// Query service bound to the current snapshot.
    pub fn service(&self) -> Arc<RosterService> {
        self.service.read().clone()
    }

    /// Rebuild the snapshot from the configured file and swap it in.
    ///
    /// On failure the previous snapshot stays in place.
    pub fn reload(&self) -> Result<GraphStats> {
        let store = GraphStore::load(&self.config.snapshot_path)?;
        let stats = store.stats();
        let service = RosterService::from_config(Arc::new(store), &self.config);
        *self.service.write() = Arc::new(service);
        info!(
            "Snapshot reloaded from {}: {} players, {} teammate edges",
            self.config.snapshot_path.display(),
            stats.players,
            stats.teammate_edges
        );
        Ok(stats)
    }
}
