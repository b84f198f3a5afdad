//! URL mapping: classification and rewrite of candidate URLs.
//!
//! Each candidate goes through a fixed pipeline:
//!
//! 1. parse the candidate
//! 2. resolve its registrable domain
//! 3. look up the mirror domain (unknown domains stop here)
//! 4. replace the first occurrence of the registrable domain inside the host of the original string
//! 5. parse the rewritten string
//! 6. look up the content rule by the original registrable domain
//! 7. evaluate the rule on the rewritten URL (probing the original if the rule asks)
//! 8. drop rewrites that did not change the string
//! 9. emit
//!
//! Every failure along the way drops that candidate only. Output order always
//! follows input order, even when candidates are classified concurrently.

use std::ops::Range;
use std::sync::Arc;

use futures::stream::{self, StreamExt};
use log::{debug, error, trace, warn};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::config::{ProbePolicy, DEFAULT_MAX_CONCURRENCY};
use crate::domain::registrable_domain_of;
use crate::error_handling::{DropReason, MappingStats};
use crate::probe::ContentProbe;
use crate::rules::Verdict;
use crate::table::DomainTable;
use crate::utils::{redact_url, sanitize_candidate};

/// Knobs for a mapping run.
#[derive(Debug, Clone, Copy)]
pub struct MapOptions {
    /// How TikTok links are classified.
    pub probe_policy: ProbePolicy,
    /// Candidates classified concurrently; values below 1 are treated as 1.
    pub max_concurrency: usize,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            probe_policy: ProbePolicy::default(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

/// What happened to one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The rewritten URL to emit.
    Fixed(String),
    /// The candidate was left out, and why.
    Dropped(DropReason),
}

/// Result of mapping a batch that may have been cut short.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappedBatch {
    /// Rewritten URLs in input order.
    pub urls: Vec<String>,
    /// Number of candidates whose classification finished.
    pub completed: usize,
    /// Whether cancellation stopped the batch before every candidate finished.
    pub cancelled: bool,
}

/// Shared state for mapping candidate URLs.
///
/// Holds read-only references to the domain table and the probe, so one
/// context can serve any number of batches.
pub struct MappingContext<'a, P> {
    table: &'a DomainTable,
    probe: &'a P,
    options: MapOptions,
    stats: Arc<MappingStats>,
}

impl<'a, P: ContentProbe> MappingContext<'a, P> {
    /// Creates a context with fresh statistics.
    pub fn new(table: &'a DomainTable, probe: &'a P, options: MapOptions) -> Self {
        Self {
            table,
            probe,
            options,
            stats: Arc::new(MappingStats::new()),
        }
    }

    /// Counters of fixed and dropped candidates across all batches.
    pub fn stats(&self) -> &Arc<MappingStats> {
        &self.stats
    }

    /// Maps a batch of candidates to the rewritten URLs worth posting.
    pub async fn map_urls(&self, candidates: &[String]) -> Vec<String> {
        self.map_urls_until(candidates, &CancellationToken::new())
            .await
            .urls
    }

    /// Maps a batch, stopping early when `cancel` fires.
    ///
    /// Candidates are classified out of order but every outcome goes back to
    /// its input slot. When the token fires, candidates that had not finished
    /// are omitted and counted as cancelled; outstanding probes are dropped.
    /// Everything that did finish is returned, still in input order.
    pub async fn map_urls_until(
        &self,
        candidates: &[String],
        cancel: &CancellationToken,
    ) -> MappedBatch {
        let concurrency = self.options.max_concurrency.max(1);
        let mut outcomes = std::pin::pin!(stream::iter(candidates.iter().enumerate())
            .map(|(index, candidate)| async move { (index, self.classify(candidate).await) })
            .buffer_unordered(concurrency));

        let mut slots: Vec<Option<Outcome>> = vec![None; candidates.len()];
        let mut batch = MappedBatch::default();
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    batch.cancelled = true;
                    break;
                }
                next = outcomes.next() => match next {
                    Some((index, outcome)) => {
                        batch.completed += 1;
                        slots[index] = Some(outcome);
                    }
                    None => break,
                },
            }
        }

        batch.urls = slots
            .into_iter()
            .filter_map(|slot| match slot {
                Some(Outcome::Fixed(url)) => Some(url),
                _ => None,
            })
            .collect();

        if batch.cancelled {
            let skipped = candidates.len() - batch.completed;
            warn!(
                "Mapping cancelled after {} of {} URLs; {} omitted",
                batch.completed,
                candidates.len(),
                skipped
            );
            for _ in 0..skipped {
                self.stats.increment_drop(DropReason::Cancelled);
            }
        }
        batch
    }

    /// Runs one candidate through the pipeline and records the outcome.
    pub async fn classify(&self, candidate: &str) -> Outcome {
        let outcome = self.classify_inner(candidate).await;
        match &outcome {
            Outcome::Fixed(_) => self.stats.increment_fixed(),
            Outcome::Dropped(reason) => {
                trace!("Dropped {} ({})", sanitize_candidate(candidate), reason);
                self.stats.increment_drop(*reason);
            }
        }
        outcome
    }

    async fn classify_inner(&self, candidate: &str) -> Outcome {
        let original = match Url::parse(candidate) {
            Ok(url) => url,
            Err(e) => {
                warn!(
                    "Skipping invalid URL {}: {}",
                    sanitize_candidate(candidate),
                    e
                );
                return Outcome::Dropped(DropReason::ParseError);
            }
        };

        let domain = match registrable_domain_of(&original) {
            Ok(domain) => domain,
            Err(e) => {
                warn!(
                    "Skipping URL without registrable domain {}: {}",
                    redact_url(&original),
                    e
                );
                return Outcome::Dropped(DropReason::DomainError);
            }
        };

        let Some(replacement) = self.table.replacement(&domain) else {
            trace!("No replacement for {domain}");
            return Outcome::Dropped(DropReason::UnknownDomain);
        };

        let Some(mapped) = rewrite_host(candidate, &domain, replacement) else {
            debug!(
                "{} does not appear verbatim in the host of {}",
                domain,
                redact_url(&original)
            );
            return Outcome::Dropped(DropReason::Unchanged);
        };

        let mapped_url = match Url::parse(&mapped) {
            Ok(url) => url,
            Err(e) => {
                warn!(
                    "Rewritten URL does not parse {}: {}",
                    sanitize_candidate(&mapped),
                    e
                );
                return Outcome::Dropped(DropReason::ParseError);
            }
        };

        let Some(rule) = self.table.rule(&domain) else {
            error!(
                "No content rule found for domain {} (url: {})",
                domain,
                redact_url(&original)
            );
            return Outcome::Dropped(DropReason::MissingRule);
        };

        match rule.evaluate(&mapped_url) {
            Verdict::Accept => {}
            Verdict::Reject => return Outcome::Dropped(DropReason::Rejected),
            Verdict::NeedsProbe => match self.options.probe_policy {
                ProbePolicy::Accept => {}
                ProbePolicy::Live => {
                    if !self.probe.probe(&original).await {
                        debug!("[{}] probe rejected {}", rule.site(), redact_url(&original));
                        return Outcome::Dropped(DropReason::ProbeFailed);
                    }
                }
            },
        }

        if mapped == candidate {
            debug!("Rewrite left {} unchanged", redact_url(&original));
            return Outcome::Dropped(DropReason::Unchanged);
        }

        debug!("Fixed {} -> {}", redact_url(&original), redact_url(&mapped_url));
        Outcome::Fixed(mapped)
    }
}

/// Byte range of the host inside a raw `scheme://[userinfo@]host[:port]/...`
/// candidate, as written (case and all).
fn raw_host_span(candidate: &str) -> Option<Range<usize>> {
    let authority_start = candidate.find("://")? + 3;
    let rest = &candidate[authority_start..];
    let authority_len = rest.find(['/', '?', '#', '\\']).unwrap_or(rest.len());
    let authority = &rest[..authority_len];

    let host_start = authority.rfind('@').map_or(0, |at| at + 1);
    let host = &authority[host_start..];
    let host_len = host.find(':').unwrap_or(host.len());

    let start = authority_start + host_start;
    Some(start..start + host_len)
}

/// Replaces the first occurrence of `domain` inside the candidate's host.
///
/// Returns `None` when the host does not contain `domain` verbatim, e.g. when
/// it is written in a different case than the lowercased registrable domain.
fn rewrite_host(candidate: &str, domain: &str, replacement: &str) -> Option<String> {
    let host = raw_host_span(candidate)?;
    let offset = candidate[host.clone()].find(domain)?;
    let start = host.start + offset;

    let mut mapped = String::with_capacity(candidate.len() + replacement.len());
    mapped.push_str(&candidate[..start]);
    mapped.push_str(replacement);
    mapped.push_str(&candidate[start + domain.len()..]);
    Some(mapped)
}

/// Maps candidates with default options.
///
/// Convenience wrapper around [`MappingContext::map_urls`] for callers that do
/// not need statistics or cancellation.
pub async fn map_urls<P: ContentProbe>(
    table: &DomainTable,
    probe: &P,
    candidates: &[String],
) -> Vec<String> {
    MappingContext::new(table, probe, MapOptions::default())
        .map_urls(candidates)
        .await
}
