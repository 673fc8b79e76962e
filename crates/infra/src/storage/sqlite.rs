//! SQLite-backed key/value storage
//!
//! Persists engine state as string values under well-known keys. All SQL
//! runs on blocking worker threads via `spawn_blocking` so the async
//! services never stall on disk I/O.

use std::path::Path;

use async_trait::async_trait;
use questlog_core::KeyValueStore;
use questlog_domain::{QuestlogError, Result};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Connection};
use tokio::task;
use tracing::info;

const SCHEMA_VERSION: i32 = 1;
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Key/value store backed by a pooled SQLite database.
pub struct SqliteKeyValueStore {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteKeyValueStore {
    /// Open (or create) the database at `path` and ensure the schema exists.
    pub fn open<P: AsRef<Path>>(path: P, pool_size: u32) -> Result<Self> {
        let max_size = pool_size.max(1);
        let manager = SqliteConnectionManager::file(path.as_ref());
        let pool = Pool::builder().max_size(max_size).build(manager).map_err(map_pool_error)?;

        let store = Self { pool };
        store.run_migrations()?;

        info!(
            db_path = %path.as_ref().display(),
            max_connections = max_size,
            "sqlite key/value store initialised"
        );

        Ok(store)
    }

    /// Ensure the full schema exists on the current database.
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute_batch(SCHEMA_SQL).map_err(map_sql_error)?;
        conn.execute(
            "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, CAST(strftime('%s','now') AS INTEGER))",
            params![SCHEMA_VERSION],
        )
        .map_err(map_sql_error)?;
        Ok(())
    }

    /// Perform a health check to verify database connectivity.
    pub fn health_check(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i32>(0)).map_err(map_sql_error)?;
        Ok(())
    }

    /// Fetch the value stored under `key`, if any.
    pub async fn get_value(&self, key: String) -> Result<Option<String>> {
        let pool = self.pool.clone();

        task::spawn_blocking(move || -> Result<Option<String>> {
            let conn = pool.get().map_err(map_pool_error)?;
            select_value(&conn, &key)
        })
        .await
        .map_err(map_join_error)?
    }

    /// Insert or overwrite the value stored under `key`.
    pub async fn set_value(&self, key: String, value: String) -> Result<()> {
        let pool = self.pool.clone();

        task::spawn_blocking(move || -> Result<()> {
            let conn = pool.get().map_err(map_pool_error)?;
            upsert_value(&conn, &key, &value)
        })
        .await
        .map_err(map_join_error)?
    }

    fn conn(&self) -> Result<PooledConnection<SqliteConnectionManager>> {
        self.pool.get().map_err(map_pool_error)
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Self::get_value(self, key.to_string()).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::set_value(self, key.to_string(), value.to_string()).await
    }
}

// ===== Synchronous SQL Operations =====

fn select_value(conn: &Connection, key: &str) -> Result<Option<String>> {
    let result =
        conn.query_row("SELECT value FROM kv_store WHERE key = ?1", params![key], |row| {
            row.get::<_, String>(0)
        });

    match result {
        Ok(value) => Ok(Some(value)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(map_sql_error(e)),
    }
}

fn upsert_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, CAST(strftime('%s','now') AS INTEGER))
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at",
        params![key, value],
    )
    .map_err(map_sql_error)?;
    Ok(())
}

fn map_sql_error(err: rusqlite::Error) -> QuestlogError {
    QuestlogError::Storage(err.to_string())
}

fn map_pool_error(err: r2d2::Error) -> QuestlogError {
    QuestlogError::Storage(err.to_string())
}

fn map_join_error(err: task::JoinError) -> QuestlogError {
    if err.is_cancelled() {
        QuestlogError::Internal("blocking task cancelled".to_string())
    } else {
        QuestlogError::Internal(format!("blocking task failed: {err}"))
    }
}
