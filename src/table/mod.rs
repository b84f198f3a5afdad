//! Domain replacement table and content rule registry.
//!
//! Both maps are keyed by registrable domain. They are built once at startup,
//! optionally extended from a [`DomainOverrides`] file, and never mutated while
//! URLs are being mapped.

use std::collections::HashMap;

use log::error;

use crate::config::{DomainOverrides, DEFAULT_REPLACEMENTS};
use crate::rules::ContentRule;

/// Built-in rule registry, keyed like [`DEFAULT_REPLACEMENTS`].
const DEFAULT_RULES: &[(&str, ContentRule)] = &[
    ("twitter.com", ContentRule::Tweet),
    ("x.com", ContentRule::Tweet),
    ("tiktok.com", ContentRule::TikTok),
    ("instagram.com", ContentRule::Instagram),
    ("reddit.com", ContentRule::Reddit),
];

/// Immutable replacement table plus content rule registry.
///
/// Every replacement key is expected to have a rule. A missing rule is a
/// configuration error that [`DomainTable::missing_rules`] reports and the
/// mapper logs per URL; it never panics.
#[derive(Debug, Clone, Default)]
pub struct DomainTable {
    replacements: HashMap<String, String>,
    rules: HashMap<String, ContentRule>,
}

impl DomainTable {
    /// Builds a table from explicit maps.
    pub fn new(replacements: HashMap<String, String>, rules: HashMap<String, ContentRule>) -> Self {
        Self {
            replacements,
            rules,
        }
    }

    /// The built-in Twitter/X, TikTok, Instagram and Reddit mirrors.
    pub fn with_defaults() -> Self {
        Self {
            replacements: DEFAULT_REPLACEMENTS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            rules: DEFAULT_RULES
                .iter()
                .map(|(domain, rule)| (domain.to_string(), *rule))
                .collect(),
        }
    }

    /// Returns a copy of this table with `overrides` merged on top.
    pub fn merged_with(mut self, overrides: DomainOverrides) -> Self {
        self.replacements.extend(overrides.replacements);
        self.rules.extend(overrides.rules);
        self
    }

    /// Returns a copy of this table where `domain` uses `rule`.
    ///
    /// Mostly useful for tests that swap the TikTok rule for something that
    /// never reaches the network.
    pub fn with_rule(mut self, domain: &str, rule: ContentRule) -> Self {
        self.rules.insert(domain.to_string(), rule);
        self
    }

    /// Returns a copy of this table without a rule for `domain`.
    pub fn without_rule(mut self, domain: &str) -> Self {
        self.rules.remove(domain);
        self
    }

    /// Mirror domain for a registrable domain.
    pub fn replacement(&self, domain: &str) -> Option<&str> {
        self.replacements.get(domain).map(String::as_str)
    }

    /// Content rule for a registrable domain.
    pub fn rule(&self, domain: &str) -> Option<ContentRule> {
        self.rules.get(domain).copied()
    }

    /// Number of replacement entries.
    pub fn len(&self) -> usize {
        self.replacements.len()
    }

    /// Whether there are no replacement entries.
    pub fn is_empty(&self) -> bool {
        self.replacements.is_empty()
    }

    /// Replacement keys that have no rule, sorted.
    pub fn missing_rules(&self) -> Vec<&str> {
        let mut missing: Vec<&str> = self
            .replacements
            .keys()
            .filter(|domain| !self.rules.contains_key(domain.as_str()))
            .map(String::as_str)
            .collect();
        missing.sort_unstable();
        missing
    }

    /// Replacement targets that are themselves replacement keys, sorted.
    ///
    /// Such a chain would make mapped output mappable again.
    pub fn chained_replacements(&self) -> Vec<&str> {
        let mut chained: Vec<&str> = self
            .replacements
            .values()
            .filter(|target| self.replacements.contains_key(target.as_str()))
            .map(String::as_str)
            .collect();
        chained.sort_unstable();
        chained.dedup();
        chained
    }

    /// Logs every pairing problem at error severity. Returns `true` when the
    /// table is consistent.
    pub fn validate(&self) -> bool {
        let missing = self.missing_rules();
        for domain in &missing {
            error!(
                "No content rule configured for {domain}; URLs on this domain will be dropped"
            );
        }
        let chained = self.chained_replacements();
        for domain in &chained {
            error!("Replacement domain {domain} is also a replacement source");
        }
        missing.is_empty() && chained.is_empty()
    }
}
