//! Error handling and mapping statistics.
//!
//! This module provides:
//! - Startup error types (logger, HTTP client, domain override file)
//! - The domain-resolution error returned by the suffix lookup
//! - `DropReason`, the per-URL outcomes that keep a candidate out of the output
//! - Thread-safe drop statistics
//!
//! Per-URL failures never surface as errors: the mapper's contract is a
//! best-effort subsequence, so they are counted and logged instead.

mod stats;
mod types;

// Re-export public API
pub use stats::MappingStats;
pub use types::{ConfigError, DomainError, DropReason, InitializationError};
