//! Denied location provider
//!
//! Stand-in for a host where the user has not granted location access.
//! The engine runs in basic mode against this provider and every action
//! lands on the fallback coordinate.

use async_trait::async_trait;
use questlog_core::LocationProvider;
use questlog_domain::{GeoPoint, Result};

/// [`LocationProvider`] that never has permission and never has a fix.
#[derive(Default)]
pub struct DeniedLocationProvider;

impl DeniedLocationProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LocationProvider for DeniedLocationProvider {
    async fn current_location(&self) -> Result<Option<GeoPoint>> {
        Ok(None)
    }

    fn permission_granted(&self) -> bool {
        false
    }
}
