//! Engine constants
//!
//! Centralized location for all domain-level constants used throughout the
//! engine.

use crate::types::{GeoPoint, GoalLevel};

// Storage keys (names carried over from the persisted data format)
pub const KEY_ACTIONS: &str = "actions";
pub const KEY_CURRENT_LEVEL: &str = "currentLevel";
pub const KEY_STREAK: &str = "streak";
pub const KEY_DAILY_GOAL: &str = "approachesDayGoal";
pub const KEY_DAILY_GOALS_HISTORY: &str = "dailyGoalsHistory";
pub const KEY_LEVEL_UP_ACK: &str = "levelUpPopupShown";
pub const KEY_APP_MODE: &str = "appMode";

// Level ladder: a level begins at `base` lifetime approaches and carries a
// daily goal. Bases are strictly increasing.
pub const GOAL_LEVELS: [GoalLevel; 6] = [
    GoalLevel { level: 0, base: 0, goal: 1 },
    GoalLevel { level: 1, base: 1, goal: 10 },
    GoalLevel { level: 2, base: 10, goal: 15 },
    GoalLevel { level: 3, base: 15, goal: 20 },
    GoalLevel { level: 4, base: 20, goal: 25 },
    GoalLevel { level: 5, base: 25, goal: 30 },
];

// Goals & streaks
pub const DEFAULT_DAILY_GOAL: u32 = 10;
pub const STREAK_TWO_FLAMES: u32 = 2;
pub const STREAK_THREE_FLAMES: u32 = 3;

// Geospatial configuration
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
pub const DEFAULT_CLUSTER_RADIUS_M: f64 = 10.0;
pub const TEST_LOCATION_RADIUS_M: f64 = 500.0;

// Coordinate recorded when location capture is off or unavailable
pub const FALLBACK_LOCATION: GeoPoint =
    GeoPoint { latitude: 0.0, longitude: 0.0, accuracy: None };
