//! Application context - dependency injection container

use std::sync::Arc;

use questlog_core::{
    ActionStore, Aggregator, GoalEngine, KeyValueStore, LocationProvider, MapRenderer, MapService,
};
use questlog_domain::{Config, Result};
use questlog_infra::{
    DeniedLocationProvider, JitteredLocationProvider, LogMapRenderer, SqliteKeyValueStore,
};

/// Type alias for key/value store trait object
type DynKeyValueStore = dyn KeyValueStore;

/// Type alias for location provider trait object
type DynLocationProvider = dyn LocationProvider;

/// Type alias for map renderer trait object
type DynMapRenderer = dyn MapRenderer;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub storage: Arc<DynKeyValueStore>,
    pub actions: Arc<ActionStore>,
    pub aggregator: Arc<Aggregator>,
    pub goals: Arc<GoalEngine>,
    pub map: Arc<MapService>,
}

impl AppContext {
    /// Create a new application context with configuration from the loader
    pub async fn new() -> Result<Self> {
        Self::new_with_config(questlog_infra::config::load()).await
    }

    /// Create a new application context with custom configuration
    ///
    /// Wires the default adapters: SQLite storage at the configured path,
    /// a denied location provider (the engine runs in basic mode until the
    /// host supplies a real one), and the log renderer. Hosts with a
    /// positioning stack or map widget use
    /// [`AppContext::new_with_adapters`].
    pub async fn new_with_config(config: Config) -> Result<Self> {
        let storage: Arc<DynKeyValueStore> =
            Arc::new(SqliteKeyValueStore::open(&config.storage.path, config.storage.pool_size)?);
        let location: Arc<DynLocationProvider> = Arc::new(DeniedLocationProvider::new());
        let renderer: Arc<DynMapRenderer> = Arc::new(LogMapRenderer::new());

        Self::new_with_adapters(config, storage, location, renderer).await
    }

    /// Create a new application context with injected adapters
    ///
    /// Test-mode scatter wraps whichever provider the host supplies. The
    /// persisted action list is replayed before any service is handed out,
    /// so callers never observe a half-initialised store.
    pub async fn new_with_adapters(
        config: Config,
        storage: Arc<DynKeyValueStore>,
        location: Arc<DynLocationProvider>,
        renderer: Arc<DynMapRenderer>,
    ) -> Result<Self> {
        let location: Arc<DynLocationProvider> = if config.location.test_mode {
            Arc::new(JitteredLocationProvider::new(location, config.location.test_radius_m))
        } else {
            location
        };

        let actions = Arc::new(ActionStore::new(Arc::clone(&storage), location));
        let loaded = actions.load_all().await;
        tracing::info!(actions = loaded.len(), "action store loaded");

        let aggregator = Arc::new(Aggregator::new(Arc::clone(&actions)));

        let goals = Arc::new(
            GoalEngine::new(Arc::clone(&storage), Arc::clone(&actions))
                .with_default_goal(config.goals.default_daily_goal),
        );

        let map = Arc::new(
            MapService::new(Arc::clone(&actions), renderer)
                .with_cluster_radius(config.map.cluster_radius_m)
                .with_trail(config.map.trail_enabled),
        );

        Ok(Self { config, storage, actions, aggregator, goals, map })
    }
}
