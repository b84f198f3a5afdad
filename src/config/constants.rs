//! Configuration constants.
//!
//! Default values for the probe, batch concurrency, and the built-in domain
//! tables.

use std::time::Duration;

/// User-Agent sent with TikTok probe requests.
pub const DEFAULT_USER_AGENT: &str = "Embed Fixer Bot";

/// Per-request timeout for the TikTok probe in seconds.
///
/// The probe sits on the classification path of an interactive reply, so a
/// slow mirror must not hold up the whole batch for long.
pub const PROBE_TIMEOUT_SECS: u64 = 5;

/// Number of candidates classified concurrently within a batch.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Upper bound on a whole batch when no explicit deadline is configured.
pub const DEFAULT_BATCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Built-in replacement table: registrable source domain to mirror domain.
pub const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("twitter.com", "fxtwitter.com"),
    ("x.com", "fxtwitter.com"),
    ("tiktok.com", "tiktxk.com"),
    ("instagram.com", "ddinstagram.com"),
    ("reddit.com", "rxddit.com"),
];
