//! In-memory key/value storage
//!
//! Process-local store for ephemeral engines and wiring tests. Values do
//! not survive a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use questlog_core::KeyValueStore;
use questlog_domain::Result;

/// Non-persistent [`KeyValueStore`] holding values in a process-local map.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value before the store is handed to the engine.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.entries.write().insert(key.to_string(), value.to_string());
        self
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
