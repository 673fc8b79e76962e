//! Port interface for persisted key/value storage
//!
//! The engine persists everything as opaque string values under well-known
//! keys (see `questlog_domain::constants`). Callers treat a failed read as
//! "value absent" and a failed write as "dropped", logging either case.

use async_trait::async_trait;
use questlog_domain::Result;

/// Trait for the key/value store backing the engine
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Get the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
