//! In-memory fakes for the engine's ports

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use questlog_core::{KeyValueStore, LocationProvider, MapRenderer};
use questlog_domain::{Cluster, GeoPoint, QuestlogError, Result};

/// In-memory `KeyValueStore` with an optional artificial write latency.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    write_delay: Option<Duration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep this long inside every `set`, widening race windows.
    pub fn with_write_delay(mut self, delay: Duration) -> Self {
        self.write_delay = Some(delay);
        self
    }

    /// Pre-seed a key.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values.lock().expect("store lock").insert(key.to_string(), value.to_string());
        self
    }

    /// Peek at a stored value without going through the port.
    pub fn value_of(&self, key: &str) -> Option<String> {
        self.values.lock().expect("store lock").get(key).cloned()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().expect("store lock").get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if let Some(delay) = self.write_delay {
            tokio::time::sleep(delay).await;
        }
        self.values.lock().expect("store lock").insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// `KeyValueStore` whose every operation fails.
pub struct BrokenStore;

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(QuestlogError::Storage("store offline".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(QuestlogError::Storage("store offline".to_string()))
    }
}

/// Provider that always returns the same fix.
pub struct FixedLocation(pub GeoPoint);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_location(&self) -> Result<Option<GeoPoint>> {
        Ok(Some(self.0))
    }

    fn permission_granted(&self) -> bool {
        true
    }
}

/// Provider with granted permission but no fix to offer.
pub struct NoFixLocation;

#[async_trait]
impl LocationProvider for NoFixLocation {
    async fn current_location(&self) -> Result<Option<GeoPoint>> {
        Ok(None)
    }

    fn permission_granted(&self) -> bool {
        true
    }
}

/// Provider standing in for a user who denied location access.
pub struct DeniedLocation;

#[async_trait]
impl LocationProvider for DeniedLocation {
    async fn current_location(&self) -> Result<Option<GeoPoint>> {
        Ok(None)
    }

    fn permission_granted(&self) -> bool {
        false
    }
}

/// Provider that errors on every request.
pub struct FailingLocation;

#[async_trait]
impl LocationProvider for FailingLocation {
    async fn current_location(&self) -> Result<Option<GeoPoint>> {
        Err(QuestlogError::Location("gps failure".to_string()))
    }

    fn permission_granted(&self) -> bool {
        true
    }
}

/// One frame handed to the rendering port.
#[derive(Clone)]
pub struct RenderedFrame {
    pub day: NaiveDate,
    pub clusters: Vec<Cluster>,
    pub trail: Vec<GeoPoint>,
}

/// Map renderer that records every frame it is asked to draw.
#[derive(Default)]
pub struct RecordingRenderer {
    frames: Mutex<Vec<RenderedFrame>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> Vec<RenderedFrame> {
        self.frames.lock().expect("frames lock").clone()
    }
}

#[async_trait]
impl MapRenderer for RecordingRenderer {
    async fn render_day(
        &self,
        day: NaiveDate,
        clusters: &[Cluster],
        trail: &[GeoPoint],
    ) -> Result<()> {
        self.frames.lock().expect("frames lock").push(RenderedFrame {
            day,
            clusters: clusters.to_vec(),
            trail: trail.to_vec(),
        });
        Ok(())
    }
}
