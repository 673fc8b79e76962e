//! Geospatial clustering
//!
//! Greedy seed-relative clustering of one day's actions plus the ordered
//! trail of their coordinates.

pub mod clusterer;

pub use clusterer::{cluster_actions, haversine_distance_m, trail};
