// Domain module tests.

use super::*;

fn domain_of(url: &str) -> Result<String, DomainError> {
    registrable_domain_of(&Url::parse(url).expect("test URL should parse"))
}

#[test]
fn test_registrable_domain_basic() {
    assert_eq!(registrable_domain("www.example.com").unwrap(), "example.com");
}

#[test]
fn test_registrable_domain_bare() {
    assert_eq!(registrable_domain("reddit.com").unwrap(), "reddit.com");
    assert_eq!(registrable_domain("x.com").unwrap(), "x.com");
}

#[test]
fn test_registrable_domain_multiple_subdomains() {
    assert_eq!(registrable_domain("www.old.reddit.com").unwrap(), "reddit.com");
    assert_eq!(registrable_domain("vm.tiktok.com").unwrap(), "tiktok.com");
}

#[test]
fn test_registrable_domain_multi_part_suffix() {
    // Should return "example.co.uk" (registrable domain), not "co.uk" (public suffix)
    assert_eq!(
        registrable_domain("sub.example.co.uk").unwrap(),
        "example.co.uk"
    );
    assert_eq!(
        registrable_domain("www.example.com.br").unwrap(),
        "example.com.br"
    );
}

#[test]
fn test_registrable_domain_uppercase_host() {
    assert_eq!(registrable_domain("WWW.Reddit.COM").unwrap(), "reddit.com");
}

#[test]
fn test_registrable_domain_public_suffix_only() {
    assert!(matches!(
        registrable_domain("co.uk"),
        Err(DomainError::NoRegistrableDomain(_))
    ));
    assert!(matches!(
        registrable_domain("com"),
        Err(DomainError::NoRegistrableDomain(_))
    ));
}

#[test]
fn test_registrable_domain_ip_literals() {
    assert!(matches!(
        registrable_domain("127.0.0.1"),
        Err(DomainError::IpAddress(_))
    ));
    assert!(matches!(
        registrable_domain("[2001:db8::1]"),
        Err(DomainError::IpAddress(_))
    ));
}

#[test]
fn test_registrable_domain_of_with_port_query_fragment() {
    assert_eq!(
        domain_of("https://www.example.com:8080/path?query=1#fragment").unwrap(),
        "example.com"
    );
}

#[test]
fn test_registrable_domain_of_ip_url() {
    assert!(matches!(
        domain_of("http://127.0.0.1:3000/video/1"),
        Err(DomainError::IpAddress(_))
    ));
    assert!(matches!(
        domain_of("http://[::1]/"),
        Err(DomainError::IpAddress(_))
    ));
}

#[test]
fn test_registrable_domain_of_without_host() {
    assert_eq!(
        domain_of("file:///path/to/file"),
        Err(DomainError::MissingHost)
    );
}

// Property-based tests using proptest
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_subdomains_preserve_root(
        subdomain in prop::collection::vec("[a-z]{2,10}", 1..5),
        domain in "[a-z]{5,15}",
        tld in "(com|org|net|co\\.uk)"
    ) {
        let root = registrable_domain(&format!("{}.{}", domain, tld));
        let sub = registrable_domain(&format!("{}.{}.{}", subdomain.join("."), domain, tld));

        prop_assert_eq!(root.clone().ok(), Some(format!("{}.{}", domain, tld)));
        prop_assert_eq!(root.ok(), sub.ok());
    }

    #[test]
    fn test_resolution_idempotent(
        domain in "[a-z]{5,15}",
        tld in "(com|org|net|co\\.uk)"
    ) {
        let first = registrable_domain(&format!("www.{}.{}", domain, tld));
        prop_assert!(first.is_ok());
        let first = first.unwrap();
        let second = registrable_domain(&first);
        prop_assert_eq!(Some(first), second.ok());
    }

    #[test]
    fn test_resolution_no_panic(host in "[a-zA-Z0-9.-]{0,80}") {
        let _result = registrable_domain(&host);
    }
}
