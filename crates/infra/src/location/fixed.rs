//! Fixed location provider
//!
//! Always reports the same coordinate with permission granted. Host
//! applications without a live positioning stack wire this in with
//! whatever coordinate their own platform layer resolved.

use async_trait::async_trait;
use questlog_core::LocationProvider;
use questlog_domain::{GeoPoint, Result};

/// [`LocationProvider`] pinned to a single coordinate.
pub struct FixedLocationProvider {
    location: GeoPoint,
}

impl FixedLocationProvider {
    pub fn new(location: GeoPoint) -> Self {
        Self { location }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn current_location(&self) -> Result<Option<GeoPoint>> {
        Ok(Some(self.location))
    }

    fn permission_granted(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_the_pinned_coordinate() {
        let provider = FixedLocationProvider::new(GeoPoint::new(52.52, 13.405));

        assert!(provider.permission_granted());

        let location = provider.current_location().await.expect("location resolved");
        assert_eq!(location, Some(GeoPoint::new(52.52, 13.405)));
    }
}
