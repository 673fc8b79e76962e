//! Domain types and models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Actions
// ============================================================================

/// Kind of a logged action
///
/// Serialized names match the persisted JSON format (`camelCase`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    Approach,          // opener attempt
    Contact,           // contact details exchanged
    InstantDate,       // approach that turned into a date on the spot
    MissedOpportunity, // noticed but never attempted
}

impl ActionKind {
    /// Marker stacking priority on the map; higher draws on top.
    pub fn priority(self) -> u8 {
        match self {
            Self::InstantDate => 3,
            Self::Contact => 2,
            Self::Approach => 1,
            Self::MissedOpportunity => 0,
        }
    }

    /// Whether this kind counts toward the daily approach goal.
    ///
    /// Product rule: everything except a missed opportunity is an approach.
    pub fn counts_as_approach(self) -> bool {
        !matches!(self, Self::MissedOpportunity)
    }
}

/// Geographic coordinate attached to an action
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude, accuracy: None }
    }
}

/// A single recorded event
///
/// Immutable once created; the store only ever deletes whole actions.
/// The serialized shape matches the JSON blobs under the `actions` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Action {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub timestamp: DateTime<Utc>,
    pub location: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Action {
    /// Creates an action stamped with a fresh id and the current instant.
    pub fn new(kind: ActionKind, location: GeoPoint, notes: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            timestamp: Utc::now(),
            location,
            notes,
        }
    }
}

// ============================================================================
// Derived projections
// ============================================================================

/// Per-bucket event tallies
///
/// `approaches` counts every action in the bucket except misses, so
/// `total() == approaches + missed_opportunities`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    pub approaches: u32,
    pub contacts: u32,
    pub instant_dates: u32,
    pub missed_opportunities: u32,
}

impl Counters {
    /// Total number of recorded actions in the bucket.
    pub fn total(&self) -> u32 {
        self.approaches + self.missed_opportunities
    }
}

/// One row of the level ladder
///
/// `base` is the lifetime approach count at which the level begins; `goal`
/// is the daily approach target while at it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GoalLevel {
    pub level: u32,
    pub base: u32,
    pub goal: u32,
}

/// Streak display class derived from named day thresholds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum FlameTier {
    None,
    One,
    Two,
    Three,
}

/// Snapshot of goal progress for the current day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalStatus {
    pub level: u32,
    pub daily_goal: u32,
    pub approaches_today: u32,
    pub goal_met: bool,
    pub streak: u32,
    pub flame_tier: FlameTier,
    /// Level awaiting a one-time notification, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_level_up: Option<u32>,
}

/// Group of same-day actions within clustering radius of a seed
///
/// `top_action` is the highest-priority member and supplies the marker
/// coordinate; `id` is the seed action's id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cluster {
    pub id: String,
    pub actions: Vec<Action>,
    pub coordinate: GeoPoint,
    pub top_action: Action,
}

impl Cluster {
    /// Number of member actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

// ============================================================================
// Modes
// ============================================================================

/// Coordinate capture mode
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    Basic,     // no location capture, fallback coordinate only
    Fullscale, // capture device location per action
}

impl Default for AppMode {
    fn default() -> Self {
        Self::Fullscale
    }
}

impl std::fmt::Display for AppMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Fullscale => write!(f, "fullscale"),
        }
    }
}

impl std::str::FromStr for AppMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "fullscale" => Ok(Self::Fullscale),
            _ => Err(format!("Invalid AppMode: {s}")),
        }
    }
}
