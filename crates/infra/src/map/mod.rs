//! Map renderers

pub mod log_renderer;

pub use log_renderer::*;
