//! Goal progression
//!
//! Level ladder lookups, the active daily goal, per-date goal history,
//! day streaks, and one-time level-up notifications.

pub mod service;

pub use service::GoalEngine;
