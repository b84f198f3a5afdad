// Content rule tests.

use super::*;

fn verdict(rule: ContentRule, url: &str) -> Verdict {
    rule.evaluate(&Url::parse(url).expect("test URL should parse"))
}

#[test]
fn test_path_segments_strip_leading_slash() {
    let url = Url::parse("https://x.com/example/2348570197856").unwrap();
    assert_eq!(path_segments(&url), vec!["example", "2348570197856"]);
}

#[test]
fn test_path_segments_root_is_single_empty_segment() {
    let url = Url::parse("https://reddit.com").unwrap();
    assert_eq!(path_segments(&url), vec![""]);
    let url = Url::parse("https://reddit.com/").unwrap();
    assert_eq!(path_segments(&url), vec![""]);
}

#[test]
fn test_path_segments_keep_trailing_empty_segment() {
    let url = Url::parse("https://www.reddit.com/r/aww/comments/90bu6w/title/").unwrap();
    assert_eq!(
        path_segments(&url),
        vec!["r", "aww", "comments", "90bu6w", "title", ""]
    );
}

#[test]
fn test_tweet_numeric_id_accepted() {
    assert_eq!(
        verdict(ContentRule::Tweet, "https://fxtwitter.com/example/2348570197856"),
        Verdict::Accept
    );
}

#[test]
fn test_tweet_profile_rejected() {
    assert_eq!(
        verdict(ContentRule::Tweet, "https://fxtwitter.com/example"),
        Verdict::Reject
    );
}

#[test]
fn test_tweet_known_non_post_pages_rejected() {
    assert_eq!(
        verdict(ContentRule::Tweet, "https://fxtwitter.com/example/with_replies"),
        Verdict::Reject
    );
    assert_eq!(
        verdict(ContentRule::Tweet, "https://fxtwitter.com/example/media"),
        Verdict::Reject
    );
}

#[test]
fn test_tweet_unknown_shape_falls_back_to_accept() {
    assert_eq!(
        verdict(ContentRule::Tweet, "https://fxtwitter.com/example/status"),
        Verdict::Accept
    );
    assert_eq!(
        verdict(
            ContentRule::Tweet,
            "https://fxtwitter.com/example/status/2348570197856"
        ),
        Verdict::Accept
    );
}

#[test]
fn test_instagram_post_prefixes_accepted() {
    for prefix in ["reel", "reels", "p"] {
        let url = format!("https://www.ddinstagram.com/{prefix}/examplexample");
        assert_eq!(verdict(ContentRule::Instagram, &url), Verdict::Accept, "{url}");
    }
}

#[test]
fn test_instagram_profile_rejected() {
    assert_eq!(
        verdict(ContentRule::Instagram, "https://ddinstagram.com/example/tagged"),
        Verdict::Reject
    );
    assert_eq!(
        verdict(ContentRule::Instagram, "https://ddinstagram.com/example"),
        Verdict::Reject
    );
}

#[test]
fn test_instagram_root_rejected() {
    assert_eq!(
        verdict(ContentRule::Instagram, "https://ddinstagram.com"),
        Verdict::Reject
    );
}

#[test]
fn test_reddit_comments_and_share_links_accepted() {
    assert_eq!(
        verdict(
            ContentRule::Reddit,
            "https://www.rxddit.com/r/aww/comments/90bu6w/title/"
        ),
        Verdict::Accept
    );
    assert_eq!(
        verdict(ContentRule::Reddit, "https://rxddit.com/r/aww/s/29898yuaudfh0o97h"),
        Verdict::Accept
    );
}

#[test]
fn test_reddit_short_paths_rejected() {
    for url in [
        "https://rxddit.com",
        "https://rxddit.com/",
        "https://rxddit.com/r/subreddit",
        "https://rxddit.com/r/subreddit/comments",
    ] {
        assert_eq!(verdict(ContentRule::Reddit, url), Verdict::Reject, "{url}");
    }
}

#[test]
fn test_reddit_other_marker_rejected() {
    assert_eq!(
        verdict(ContentRule::Reddit, "https://rxddit.com/r/aww/top/week"),
        Verdict::Reject
    );
}

#[test]
fn test_tiktok_always_needs_probe() {
    for url in [
        "https://tiktxk.com/@example/video/123",
        "https://vm.tiktxk.com/exAmPlE/",
        "https://tiktxk.com",
    ] {
        assert_eq!(verdict(ContentRule::TikTok, url), Verdict::NeedsProbe, "{url}");
    }
}

#[test]
fn test_rule_deserializes_from_lowercase_name() {
    let rule: ContentRule = serde_json::from_str("\"tiktok\"").unwrap();
    assert_eq!(rule, ContentRule::TikTok);
    let rule: ContentRule = serde_json::from_str("\"tweet\"").unwrap();
    assert_eq!(rule, ContentRule::Tweet);
}

// Property-based tests using proptest
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_tweet_numeric_ids_always_accepted(
        user in "[A-Za-z0-9_]{1,15}",
        id in "[0-9]{1,20}"
    ) {
        let url = format!("https://fxtwitter.com/{}/{}", user, id);
        prop_assert_eq!(verdict(ContentRule::Tweet, &url), Verdict::Accept);
    }

    #[test]
    fn test_reddit_needs_four_segments(
        segments in prop::collection::vec("[a-z0-9]{1,8}", 0..4)
    ) {
        let url = format!("https://rxddit.com/{}", segments.join("/"));
        prop_assert_eq!(verdict(ContentRule::Reddit, &url), Verdict::Reject);
    }
}
