//! Counter aggregation
//!
//! Derived per-day and lifetime tallies. Projections are pure functions of
//! the action list and are recomputed in full on every call.

pub mod service;

pub use service::{counters_for, Aggregator};
