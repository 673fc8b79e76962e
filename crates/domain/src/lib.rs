//! # Questlog Domain
//!
//! Business domain types and models for Questlog.
//!
//! This crate contains:
//! - Domain data types (Action, Counters, Cluster, etc.)
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants and the level ladder
//!
//! ## Architecture
//! - No dependencies on other Questlog crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod day;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
