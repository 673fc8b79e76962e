//! Jittered location provider
//!
//! Decorates another provider and scatters each fix uniformly within a
//! configured radius. Used in test mode to fan recorded actions out over
//! a neighbourhood instead of stacking them on one coordinate.

use std::sync::Arc;

use async_trait::async_trait;
use questlog_core::LocationProvider;
use questlog_domain::{GeoPoint, Result};
use rand::Rng;

const METERS_PER_DEGREE_LAT: f64 = 111_000.0;

/// [`LocationProvider`] decorator that offsets every fix by a random
/// distance within `radius_m` of the inner provider's coordinate.
pub struct JitteredLocationProvider {
    inner: Arc<dyn LocationProvider>,
    radius_m: f64,
}

impl JitteredLocationProvider {
    pub fn new(inner: Arc<dyn LocationProvider>, radius_m: f64) -> Self {
        Self { inner, radius_m }
    }
}

#[async_trait]
impl LocationProvider for JitteredLocationProvider {
    async fn current_location(&self) -> Result<Option<GeoPoint>> {
        let fix = self.inner.current_location().await?;
        Ok(fix.map(|point| scatter(point, self.radius_m)))
    }

    fn permission_granted(&self) -> bool {
        self.inner.permission_granted()
    }
}

/// Pick a coordinate uniformly distributed within `radius_m` of `center`.
fn scatter(center: GeoPoint, radius_m: f64) -> GeoPoint {
    let mut rng = rand::thread_rng();
    let u: f64 = rng.gen();
    let v: f64 = rng.gen();

    let radius_deg = radius_m / METERS_PER_DEGREE_LAT;
    let w = radius_deg * u.sqrt();
    let t = 2.0 * std::f64::consts::PI * v;
    let x = w * t.cos();
    let y = w * t.sin();

    GeoPoint {
        latitude: center.latitude + y,
        longitude: center.longitude + x / center.latitude.to_radians().cos(),
        accuracy: center.accuracy,
    }
}
