//! # Questlog App
//!
//! Application facade - dependency injection and engine entry point.
//!
//! This crate contains:
//! - Application context (dependency injection)
//! - Tracing initialisation
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Hosts embed an [`AppContext`] and call the services it carries

pub mod context;

// Re-export for convenience
pub use context::*;

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG`, defaulting to `info`. Later calls
/// keep the first subscriber, so tests may call this freely.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .try_init();
}
