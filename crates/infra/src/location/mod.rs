//! Location providers

pub mod denied;
pub mod fixed;
pub mod jitter;

pub use denied::*;
pub use fixed::*;
pub use jitter::*;
