//! Per-domain content rules.
//!
//! A content rule decides whether a URL points at a single piece of content
//! (a tweet, a reel, a reddit thread) rather than a profile, feed, or home page.
//! Rules only look at the path, split on `/` with the leading empty segment
//! removed, so `https://x.com/user/123` yields `["user", "123"]`.
//!
//! The rule set is closed: each supported domain family is one variant of
//! [`ContentRule`], and domains are bound to variants through the
//! [`crate::table::DomainTable`].

use log::debug;
use serde::Deserialize;
use strum_macros::EnumIter as EnumIterMacro;
use url::Url;

use crate::utils::redact_url;

/// Result of evaluating a content rule on a URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The URL references a single post.
    Accept,
    /// The URL is a profile, feed, or otherwise not worth fixing.
    Reject,
    /// The path cannot decide; the probe policy has the final word.
    NeedsProbe,
}

/// Content rule for one family of domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, EnumIterMacro)]
#[serde(rename_all = "lowercase")]
pub enum ContentRule {
    /// Twitter / X: `/<user>/<numeric id>`, with a permissive fallback.
    Tweet,
    /// Instagram: `/reel/<id>`, `/reels/<id>`, `/p/<id>` only.
    Instagram,
    /// Reddit: `/r/<subreddit>/comments/<id>/...` or `/r/<subreddit>/s/<id>`.
    Reddit,
    /// TikTok: shapes vary too much to classify by path.
    TikTok,
}

/// Second path segments on Twitter/X that are known not to be posts.
const NON_POST_TWEET_PAGES: &[&str] = &["with_replies", "media"];

/// First path segments on Instagram that introduce a post.
const INSTAGRAM_POST_PREFIXES: &[&str] = &["reel", "reels", "p"];

/// Third path segments on Reddit that introduce a post.
const REDDIT_POST_MARKERS: &[&str] = &["comments", "s"];

impl ContentRule {
    /// Short site name used in log lines.
    pub fn site(&self) -> &'static str {
        match self {
            ContentRule::Tweet => "twitter",
            ContentRule::Instagram => "instagram",
            ContentRule::Reddit => "reddit",
            ContentRule::TikTok => "tiktok",
        }
    }

    /// Evaluates the rule against a parsed URL.
    pub fn evaluate(&self, link: &Url) -> Verdict {
        let accepted = match self {
            ContentRule::Tweet => is_link_to_tweet(link),
            ContentRule::Instagram => is_link_to_instagram_post(link),
            ContentRule::Reddit => is_link_to_reddit_post(link),
            ContentRule::TikTok => return Verdict::NeedsProbe,
        };
        if accepted {
            Verdict::Accept
        } else {
            Verdict::Reject
        }
    }
}

/// Splits a URL path into segments, dropping the empty segment produced by the
/// leading slash. A bare `/` yields a single empty segment.
pub fn path_segments(link: &Url) -> Vec<&str> {
    let path = link.path();
    path.strip_prefix('/').unwrap_or(path).split('/').collect()
}

fn is_numeric_id(segment: &str) -> bool {
    segment.chars().all(|c| c.is_ascii_digit())
}

// Needs a user and something after it; numeric ids are tweets.
fn is_link_to_tweet(link: &Url) -> bool {
    let segments = path_segments(link);
    if segments.len() < 2 {
        debug!("[twitter] url too short: {}", redact_url(link));
        return false;
    }

    if is_numeric_id(segments[1]) {
        return true;
    }

    if NON_POST_TWEET_PAGES.contains(&segments[1]) {
        return false;
    }

    // Unknown shapes are more likely posts (short links, new layouts) than
    // profile pages, so they are let through.
    debug!(
        "[twitter] fallback url: {} (tweet id: {})",
        redact_url(link),
        segments[1]
    );
    true
}

fn is_link_to_instagram_post(link: &Url) -> bool {
    let segments = path_segments(link);
    if segments.len() < 2 {
        debug!("[instagram] url too short: {}", redact_url(link));
        return false;
    }
    if INSTAGRAM_POST_PREFIXES.contains(&segments[0]) {
        return true;
    }
    debug!(
        "[instagram] fallback url: {} (segments: {:?})",
        redact_url(link),
        segments
    );
    false
}

fn is_link_to_reddit_post(link: &Url) -> bool {
    let segments = path_segments(link);
    if segments.len() < 4 {
        debug!("[reddit] url too short: {}", redact_url(link));
        return false;
    }
    if REDDIT_POST_MARKERS.contains(&segments[2]) {
        return true;
    }
    debug!("[reddit] fallback url: {}", redact_url(link));
    false
}
