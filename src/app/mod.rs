//! Main application modules.
//!
//! This module provides shutdown handling and statistics printing used by the
//! run entry point.

pub mod shutdown;
pub mod statistics;

// Re-export public API
pub use shutdown::{shutdown_gracefully, spawn_batch_deadline, spawn_interrupt_watcher};
pub use statistics::{print_mapping_statistics, print_simple_summary};
