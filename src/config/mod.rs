//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, concurrency, default domain table)
//! - CLI option types and parsing
//! - Loading of the optional domain override file

mod constants;
mod file;
mod types;

// Re-export all constants
pub use constants::*;
pub use file::{load_domain_overrides, DomainOverrides};
pub use types::{Config, LogFormat, LogLevel, ProbePolicy};
