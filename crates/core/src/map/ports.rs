//! Port interface for map rendering

use async_trait::async_trait;
use chrono::NaiveDate;
use questlog_domain::{Cluster, GeoPoint, Result};

/// Trait for the widget that draws a day's markers
///
/// Receives clusters already in z-order (lowest priority first) and the
/// optional trail coordinates. Tap handling stays on the renderer's side;
/// each cluster carries its full member list for that purpose.
#[async_trait]
pub trait MapRenderer: Send + Sync {
    /// Draw one day's clustered markers and trail overlay.
    async fn render_day(
        &self,
        day: NaiveDate,
        clusters: &[Cluster],
        trail: &[GeoPoint],
    ) -> Result<()>;
}
