//! Nolza test support utilities
//!
//! Shared helpers for integration tests: unified logging initialization and
//! small catalog fixtures.

pub mod fixtures;
pub mod logging;
