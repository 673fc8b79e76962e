//! # Questlog Infrastructure
//!
//! Infrastructure implementations of core engine ports.
//!
//! This crate contains:
//! - Storage implementations (SQLite, in-memory)
//! - Location providers (fixed, denied, jittered)
//! - Map renderers (log-based)
//! - Configuration loading (environment, files)
//!
//! ## Architecture
//! - Implements traits defined in `questlog-core`
//! - Depends on `questlog-domain` and `questlog-core`
//! - Contains all "impure" code (I/O, randomness, clocks)

pub mod config;
pub mod location;
pub mod map;
pub mod storage;

// Re-export commonly used items
pub use location::*;
pub use map::*;
pub use storage::*;
