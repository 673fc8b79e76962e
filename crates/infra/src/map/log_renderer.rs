//! Log-based map renderer
//!
//! Headless [`MapRenderer`] that writes each frame to the tracing log.
//! Hosts with a real map widget supply their own renderer; this one keeps
//! the engine observable everywhere else.

use async_trait::async_trait;
use chrono::NaiveDate;
use questlog_core::MapRenderer;
use questlog_domain::day;
use questlog_domain::{Cluster, GeoPoint, Result};
use tracing::{debug, info};

/// [`MapRenderer`] that logs frames instead of drawing them.
#[derive(Default)]
pub struct LogMapRenderer;

impl LogMapRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MapRenderer for LogMapRenderer {
    async fn render_day(
        &self,
        day: NaiveDate,
        clusters: &[Cluster],
        trail: &[GeoPoint],
    ) -> Result<()> {
        info!(
            day = %day::day_key(day),
            clusters = clusters.len(),
            trail_points = trail.len(),
            "rendering day frame"
        );

        for cluster in clusters {
            debug!(
                cluster_id = %cluster.id,
                members = cluster.actions.len(),
                kind = ?cluster.top_action.kind,
                latitude = cluster.coordinate.latitude,
                longitude = cluster.coordinate.longitude,
                "cluster marker"
            );
        }

        Ok(())
    }
}
