//! Configuration management

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CLUSTER_RADIUS_M, DEFAULT_DAILY_GOAL, TEST_LOCATION_RADIUS_M};

/// Engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub map: MapConfig,
    pub goals: GoalsConfig,
    pub location: LocationConfig,
}

/// Key/value storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub path: String,
    pub pool_size: u32,
}

/// Map clustering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub cluster_radius_m: f64,
    /// Path overlay of the day's coordinates; ships disabled.
    pub trail_enabled: bool,
}

/// Goal engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalsConfig {
    pub default_daily_goal: u32,
}

/// Location capture configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// When set, captured coordinates are jittered within `test_radius_m`.
    pub test_mode: bool,
    pub test_radius_m: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                path: "questlog.db".to_string(),
                pool_size: 8,
            },
            map: MapConfig {
                cluster_radius_m: DEFAULT_CLUSTER_RADIUS_M,
                trail_enabled: false,
            },
            goals: GoalsConfig {
                default_daily_goal: DEFAULT_DAILY_GOAL,
            },
            location: LocationConfig {
                test_mode: false,
                test_radius_m: TEST_LOCATION_RADIUS_M,
            },
        }
    }
}
