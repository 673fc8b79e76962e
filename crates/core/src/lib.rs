//! # Questlog Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Engine services (action store, aggregation, goals, map)
//! - Port/adapter interfaces (traits)
//! - The geospatial clustering algorithm
//!
//! ## Architecture Principles
//! - Only depends on `questlog-domain`
//! - No database or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod actions;
pub mod aggregate;
pub mod geo;
pub mod goals;
pub mod map;

// Infrastructure ports
pub mod storage_ports;

// Re-export specific items to avoid ambiguity
pub use actions::ports::LocationProvider;
pub use actions::ActionStore;
pub use aggregate::{counters_for, Aggregator};
pub use geo::{cluster_actions, haversine_distance_m, trail};
pub use goals::GoalEngine;
pub use map::ports::MapRenderer;
pub use map::MapService;
pub use storage_ports::KeyValueStore;
