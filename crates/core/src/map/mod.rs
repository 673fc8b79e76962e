//! Map projection
//!
//! Runs the clusterer over a selected day and feeds the rendering port.

pub mod ports;
pub mod service;

pub use ports::MapRenderer;
pub use service::MapService;
