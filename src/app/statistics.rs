//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{DropReason, MappingStats};

/// Prints a one-line summary of the run.
///
/// Works with both plain and JSON log formats (log::info! handles formatting).
pub fn print_simple_summary(total: usize, fixed: usize, cancelled: bool, elapsed_seconds: f64) {
    info!(
        "✅ Fixed {} of {} URL{} in {:.1}s{}",
        fixed,
        total,
        if total == 1 { "" } else { "s" },
        elapsed_seconds,
        if cancelled { " (cancelled early)" } else { "" }
    );
}

/// Prints drop counts per reason to the log.
///
/// Configuration problems (a replacement without a rule) are listed
/// separately so they stand out from ordinary noise.
pub fn print_mapping_statistics(stats: &MappingStats) {
    info!(
        "Mapping statistics: seen={}, fixed={}, dropped={}",
        stats.total_seen(),
        stats.fixed_count(),
        stats.total_drops()
    );

    let total_drops = stats.total_drops();
    if total_drops == 0 {
        return;
    }

    info!("Drop Counts ({} total):", total_drops);
    for reason in DropReason::iter() {
        let count = stats.get_drop_count(reason);
        if count > 0 {
            info!("   {}: {}", reason.as_str(), count);
        }
    }

    let misconfigured: usize = DropReason::iter()
        .filter(|r| r.is_configuration_error())
        .map(|r| stats.get_drop_count(r))
        .sum();
    if misconfigured > 0 {
        log::error!(
            "{} URL(s) dropped because of domain table misconfiguration",
            misconfigured
        );
    }
}
