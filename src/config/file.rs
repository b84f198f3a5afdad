//! Domain override file.
//!
//! Extra mirror domains can be supplied as a JSON document:
//!
//! ```json
//! {
//!   "replacements": { "vxtwitter.com": "fxtwitter.com" },
//!   "rules": { "vxtwitter.com": "tweet" }
//! }
//! ```
//!
//! Both maps are merged over the built-in tables; an entry for an existing key
//! replaces the default.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error_handling::ConfigError;
use crate::rules::ContentRule;

/// Parsed contents of a domain override file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainOverrides {
    /// Registrable source domain to mirror domain.
    #[serde(default)]
    pub replacements: HashMap<String, String>,
    /// Registrable source domain to content rule.
    #[serde(default)]
    pub rules: HashMap<String, ContentRule>,
}

impl DomainOverrides {
    /// Parses overrides from a JSON string. Keys are lowercased so they line up
    /// with registrable domains produced by the suffix lookup.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: DomainOverrides = serde_json::from_str(json)?;
        Ok(Self {
            replacements: raw
                .replacements
                .into_iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.to_ascii_lowercase()))
                .collect(),
            rules: raw
                .rules
                .into_iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v))
                .collect(),
        })
    }
}

/// Reads and parses a domain override file.
///
/// # Errors
///
/// Returns `ConfigError::Read` if the file cannot be read and
/// `ConfigError::Parse` if it is not a valid override document (including
/// unknown rule names).
pub fn load_domain_overrides(path: &Path) -> Result<DomainOverrides, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    DomainOverrides::from_json(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_json_full_document() {
        let overrides = DomainOverrides::from_json(
            r#"{
                "replacements": { "Bsky.app": "bskx.app" },
                "rules": { "BSKY.APP": "tweet" }
            }"#,
        )
        .expect("valid document");
        assert_eq!(
            overrides.replacements.get("bsky.app").map(String::as_str),
            Some("bskx.app")
        );
        assert_eq!(overrides.rules.get("bsky.app"), Some(&ContentRule::Tweet));
    }

    #[test]
    fn test_from_json_missing_sections_default_to_empty() {
        let overrides = DomainOverrides::from_json("{}").expect("empty object is valid");
        assert!(overrides.replacements.is_empty());
        assert!(overrides.rules.is_empty());
    }

    #[test]
    fn test_from_json_unknown_rule_rejected() {
        let result = DomainOverrides::from_json(r#"{ "rules": { "bsky.app": "bluesky" } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_unknown_field_rejected() {
        let result = DomainOverrides::from_json(r#"{ "filters": {} }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_domain_overrides_from_file() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(
            file,
            r#"{{ "replacements": {{ "vxtwitter.com": "fxtwitter.com" }}, "rules": {{ "vxtwitter.com": "tweet" }} }}"#
        )
        .expect("Failed to write overrides");

        let overrides = load_domain_overrides(file.path()).expect("Should load overrides");
        assert_eq!(overrides.replacements.len(), 1);
        assert_eq!(overrides.rules.len(), 1);
    }

    #[test]
    fn test_load_domain_overrides_missing_file() {
        let err = load_domain_overrides(Path::new("/nonexistent/domains.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_domain_overrides_invalid_json() {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        write!(file, "not json").expect("Failed to write");
        let err = load_domain_overrides(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
