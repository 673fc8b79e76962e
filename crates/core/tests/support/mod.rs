//! Shared test helpers for `questlog-core` integration tests.
//!
//! In-memory fakes for the storage, location, and rendering ports plus
//! action fixtures, so tests can focus on behaviour instead of plumbing.

#![allow(dead_code)] // each test binary uses a different subset

pub mod fakes;
pub mod fixtures;
