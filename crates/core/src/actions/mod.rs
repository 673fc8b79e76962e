//! Action recording
//!
//! This module owns the list of recorded actions: appending with resolved
//! coordinates, same-day removal, persistence, and day bucketing.

pub mod ports;
pub mod store;

pub use ports::LocationProvider;
pub use store::ActionStore;
