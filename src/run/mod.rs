//! Run orchestration: read text, extract candidates, map them, report.

mod input;

use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};
use tokio_util::sync::CancellationToken;

use crate::app::{
    print_mapping_statistics, print_simple_summary, shutdown_gracefully, spawn_batch_deadline,
    spawn_interrupt_watcher,
};
use crate::config::Config;
use crate::extract::{extract_candidate_urls, may_contain_urls};
use crate::initialization::{init_domain_table, init_probe_client};
use crate::mapper::{MapOptions, MappingContext};
use crate::probe::{ContentProbe, HttpProbe};
use crate::table::DomainTable;

pub use input::read_input;

/// Results of a fixer run.
#[derive(Debug, Clone, PartialEq)]
pub struct FixReport {
    /// Number of candidate URLs found in the input text
    pub total_candidates: usize,
    /// Rewritten URLs in the order their originals appeared
    pub fixed: Vec<String>,
    /// Whether an interrupt or the batch deadline cut the run short
    pub cancelled: bool,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Extracts and maps the URLs of one message.
///
/// This is the whole reply pipeline for a single chat message, without
/// statistics or cancellation.
pub async fn fix_message<P: ContentProbe>(
    table: &DomainTable,
    probe: &P,
    options: MapOptions,
    text: &str,
) -> Vec<String> {
    if !may_contain_urls(text) {
        return Vec::new();
    }
    let candidates = extract_candidate_urls(text);
    MappingContext::new(table, probe, options)
        .map_urls(&candidates)
        .await
}

/// Runs the fixer with the provided configuration.
///
/// Reads the input text, extracts candidate URLs, and maps them through the
/// domain table. Ctrl-C or the batch deadline stop the run early; the URLs
/// fixed up to that point are still returned.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the domain override file is
/// invalid, or the probe client cannot be built.
///
/// # Example
///
/// ```no_run
/// use embed_fixer::{run_fixer, Config, ProbePolicy};
/// use std::path::PathBuf;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     file: PathBuf::from("message.txt"),
///     tiktok_policy: ProbePolicy::Accept,
///     ..Default::default()
/// };
/// let report = run_fixer(config).await?;
/// println!("{}", report.fixed.join(" "));
/// # Ok(())
/// # }
/// ```
pub async fn run_fixer(config: Config) -> Result<FixReport> {
    let start_time = Instant::now();

    let text = read_input(&config.file).await?;
    let table = init_domain_table(config.domains.as_deref())
        .context("Failed to load domain table")?;
    let client = init_probe_client(&config.user_agent, config.probe_timeout())
        .context("Failed to initialize HTTP client")?;
    let probe = HttpProbe::new(client);

    let candidates = if may_contain_urls(&text) {
        extract_candidate_urls(&text)
    } else {
        Vec::new()
    };
    info!("Found {} candidate URL(s)", candidates.len());
    debug!(
        "TikTok policy: {:?}, concurrency: {}",
        config.tiktok_policy, config.max_concurrency
    );

    let options = MapOptions {
        probe_policy: config.tiktok_policy,
        max_concurrency: config.max_concurrency,
    };
    let ctx = MappingContext::new(&table, &probe, options);

    let cancel = CancellationToken::new();
    let mut watchers = vec![spawn_interrupt_watcher(cancel.clone())];
    watchers.extend(spawn_batch_deadline(cancel.clone(), config.batch_deadline()));

    let batch = ctx.map_urls_until(&candidates, &cancel).await;

    shutdown_gracefully(cancel, watchers).await;

    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    if config.show_stats {
        print_mapping_statistics(ctx.stats());
    }
    print_simple_summary(
        candidates.len(),
        batch.urls.len(),
        batch.cancelled,
        elapsed_seconds,
    );

    Ok(FixReport {
        total_candidates: candidates.len(),
        fixed: batch.urls,
        cancelled: batch.cancelled,
        elapsed_seconds,
    })
}
