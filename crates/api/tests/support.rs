use std::sync::Arc;

use questlog_domain::{Config, GeoPoint, StorageConfig};
use questlog_infra::{
    FixedLocationProvider, LogMapRenderer, MemoryKeyValueStore, SqliteKeyValueStore,
};
use questlog_lib::AppContext;
use tempfile::TempDir;

/// Coordinate every granted test provider pins to.
pub const BERLIN: GeoPoint = GeoPoint { latitude: 52.52, longitude: 13.405, accuracy: None };

/// Engine wired over in-memory storage and a granted fixed-coordinate
/// provider.
pub async fn memory_context() -> AppContext {
    memory_context_with(Config::default()).await
}

/// Same wiring with a caller-supplied configuration.
pub async fn memory_context_with(config: Config) -> AppContext {
    AppContext::new_with_adapters(
        config,
        Arc::new(MemoryKeyValueStore::new()),
        Arc::new(FixedLocationProvider::new(BERLIN)),
        Arc::new(LogMapRenderer::new()),
    )
    .await
    .expect("context wired")
}

/// Engine wired over a SQLite database in a fresh temp directory.
///
/// Returns the directory too; dropping it deletes the database.
pub async fn sqlite_context() -> (AppContext, TempDir) {
    let temp_dir = TempDir::new().expect("temp dir created");
    let db_path = temp_dir.path().join("questlog.db");

    let config = Config {
        storage: StorageConfig { path: db_path.to_string_lossy().to_string(), pool_size: 4 },
        ..Config::default()
    };

    let context = sqlite_context_at(config).await;
    (context, temp_dir)
}

/// Engine over the database named in `config.storage`, with a granted
/// fixed-coordinate provider. Reopening the same path replays state.
pub async fn sqlite_context_at(config: Config) -> AppContext {
    let storage = SqliteKeyValueStore::open(&config.storage.path, config.storage.pool_size)
        .expect("store opened");

    AppContext::new_with_adapters(
        config,
        Arc::new(storage),
        Arc::new(FixedLocationProvider::new(BERLIN)),
        Arc::new(LogMapRenderer::new()),
    )
    .await
    .expect("context wired")
}
