//! Storage implementations

pub mod memory;
pub mod sqlite;

pub use memory::*;
pub use sqlite::*;
