//! Port interfaces for action recording
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations.

use async_trait::async_trait;
use questlog_domain::{GeoPoint, Result};

/// Trait for resolving the device's current coordinate
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Resolve the current coordinate.
    ///
    /// `Ok(None)` means no fix is available; callers fall back to the
    /// documented fallback coordinate. The call may take arbitrarily long
    /// and must not be awaited while holding store locks.
    async fn current_location(&self) -> Result<Option<GeoPoint>>;

    /// Whether the user has granted location access.
    fn permission_granted(&self) -> bool;
}
