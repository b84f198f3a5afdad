//! Mapping statistics tracking.
//!
//! Thread-safe counters for fixed URLs and for every drop reason, shared by the
//! concurrently classified candidates of a batch.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::DropReason;

/// Thread-safe mapping statistics tracker.
///
/// All drop reasons are initialized to zero on creation. Share across tasks
/// with `Arc`.
pub struct MappingStats {
    fixed: AtomicUsize,
    drops: HashMap<DropReason, AtomicUsize>,
}

impl MappingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut drops = HashMap::new();
        for reason in DropReason::iter() {
            drops.insert(reason, AtomicUsize::new(0));
        }

        MappingStats {
            fixed: AtomicUsize::new(0),
            drops,
        }
    }

    /// Records one URL that made it into the output.
    pub fn increment_fixed(&self) {
        self.fixed.fetch_add(1, Ordering::Relaxed);
    }

    /// Records one dropped candidate.
    pub fn increment_drop(&self, reason: DropReason) {
        if let Some(counter) = self.drops.get(&reason) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment drop counter for {:?} which is not in the map. \
                 This indicates a bug in MappingStats initialization.",
                reason
            );
        }
    }

    /// Number of URLs that made it into the output.
    pub fn fixed_count(&self) -> usize {
        self.fixed.load(Ordering::SeqCst)
    }

    /// Get the count for a drop reason.
    pub fn get_drop_count(&self, reason: DropReason) -> usize {
        self.drops
            .get(&reason)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Dropped candidates across all reasons.
    pub fn total_drops(&self) -> usize {
        self.drops.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Candidates seen so far, fixed or dropped.
    pub fn total_seen(&self) -> usize {
        self.fixed_count() + self.total_drops()
    }
}

impl Default for MappingStats {
    fn default() -> Self {
        Self::new()
    }
}
