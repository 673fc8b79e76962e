//! Map service - day clustering for the rendering port

use std::sync::Arc;

use chrono::NaiveDate;
use questlog_domain::constants::DEFAULT_CLUSTER_RADIUS_M;
use questlog_domain::{Cluster, GeoPoint, Result};

use super::ports::MapRenderer;
use crate::actions::ActionStore;
use crate::geo::{cluster_actions, trail};

/// Map projection service
pub struct MapService {
    store: Arc<ActionStore>,
    renderer: Arc<dyn MapRenderer>,
    cluster_radius_m: f64,
    trail_enabled: bool,
}

impl MapService {
    /// Create a new map service with the default radius and no trail
    pub fn new(store: Arc<ActionStore>, renderer: Arc<dyn MapRenderer>) -> Self {
        Self {
            store,
            renderer,
            cluster_radius_m: DEFAULT_CLUSTER_RADIUS_M,
            trail_enabled: false,
        }
    }

    /// Change the clustering radius in meters.
    pub fn with_cluster_radius(mut self, radius_m: f64) -> Self {
        self.cluster_radius_m = radius_m;
        self
    }

    /// Toggle the path overlay.
    pub fn with_trail(mut self, enabled: bool) -> Self {
        self.trail_enabled = enabled;
        self
    }

    /// Clusters for `day`, in z-order.
    pub async fn clusters_for(&self, day: NaiveDate) -> Vec<Cluster> {
        cluster_actions(&self.store.day_actions(day).await, self.cluster_radius_m)
    }

    /// Trail coordinates for `day`; empty while the overlay is disabled.
    pub async fn trail_for(&self, day: NaiveDate) -> Vec<GeoPoint> {
        if !self.trail_enabled {
            return Vec::new();
        }
        trail(&self.store.day_actions(day).await)
    }

    /// Cluster `day`'s actions and push them to the renderer.
    pub async fn show_day(&self, day: NaiveDate) -> Result<()> {
        let clusters = self.clusters_for(day).await;
        let trail = self.trail_for(day).await;
        self.renderer.render_day(day, &clusters, &trail).await
    }
}
