//! Registrable-domain resolution.
//!
//! Uses the Public Suffix List to reduce a host to its registrable domain
//! (effective TLD plus one label), e.g. `www.old.reddit.com` becomes
//! `reddit.com` and `sub.example.co.uk` becomes `example.co.uk`.

use url::{Host, Url};

use crate::error_handling::DomainError;

/// Resolves the registrable domain of a host name.
///
/// # Errors
///
/// Returns `DomainError::IpAddress` for IPv4/IPv6 literals and
/// `DomainError::NoRegistrableDomain` when the host is itself a public suffix
/// (e.g. `com`, `co.uk`) or otherwise has no eTLD+1.
pub fn registrable_domain(host: &str) -> Result<String, DomainError> {
    let trimmed = host.trim_start_matches('[').trim_end_matches(']');
    if trimmed.parse::<std::net::Ipv4Addr>().is_ok() || trimmed.parse::<std::net::Ipv6Addr>().is_ok()
    {
        return Err(DomainError::IpAddress(host.to_string()));
    }

    let lowered = host.to_ascii_lowercase();
    psl::domain_str(&lowered)
        .map(str::to_string)
        .ok_or_else(|| DomainError::NoRegistrableDomain(host.to_string()))
}

/// Resolves the registrable domain of a parsed URL's host.
///
/// # Errors
///
/// Returns `DomainError::MissingHost` for URLs without a host (e.g. `file:///`)
/// and the errors of [`registrable_domain`] otherwise.
pub fn registrable_domain_of(url: &Url) -> Result<String, DomainError> {
    match url.host() {
        None => Err(DomainError::MissingHost),
        Some(Host::Ipv4(ip)) => Err(DomainError::IpAddress(ip.to_string())),
        Some(Host::Ipv6(ip)) => Err(DomainError::IpAddress(ip.to_string())),
        Some(Host::Domain(host)) => registrable_domain(host),
    }
}
