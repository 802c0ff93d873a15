//! Field checks for name server records.
//!
//! [`NameServer`] accepts anything; these checks run only when asked for.

use base64::{engine::general_purpose::STANDARD as B64, Engine};
use std::net::IpAddr;
use tracing::debug;

use crate::error::{Result, UltraError, ValidationIssue};
use crate::types::NameServer;

/// Longest DNS name in presentation form, without the trailing dot
const MAX_NAME_LEN: usize = 253;

/// Longest single DNS label
const MAX_LABEL_LEN: usize = 63;

/// Which fields a record must carry to be accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    /// Reject records without an IP address
    pub require_ip: bool,

    /// Reject records without a TSIG key
    pub require_tsig: bool,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            require_ip: true,
            require_tsig: false,
        }
    }
}

impl Validator {
    /// Create a validator with the default requirements
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether an IP address is required
    #[must_use]
    pub const fn require_ip(mut self, require: bool) -> Self {
        self.require_ip = require;
        self
    }

    /// Set whether a TSIG key is required
    #[must_use]
    pub const fn require_tsig(mut self, require: bool) -> Self {
        self.require_tsig = require;
        self
    }

    /// Collect every issue with the record, in field order
    #[must_use]
    pub fn check(&self, ns: &NameServer) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        match ns.ip() {
            None if self.require_ip => issues.push(ValidationIssue::MissingIp),
            None => {}
            Some(ip) => {
                if ip.parse::<IpAddr>().is_err() {
                    issues.push(ValidationIssue::InvalidIp(ip.to_string()));
                }
            }
        }

        match (ns.tsig_key(), ns.tsig_key_value()) {
            (None, None) if self.require_tsig => issues.push(ValidationIssue::MissingTsig),
            (Some(_), None) | (None, Some(_)) => issues.push(ValidationIssue::IncompleteTsig),
            _ => {}
        }

        if let Some(name) = ns.tsig_key() {
            if !is_valid_key_name(name) {
                issues.push(ValidationIssue::InvalidTsigKeyName(name.to_string()));
            }
        }

        if let Some(value) = ns.tsig_key_value() {
            if let Err(reason) = decode_secret(value) {
                issues.push(ValidationIssue::InvalidTsigKeyValue(reason));
            }
        }

        for issue in &issues {
            debug!(ip = ?ns.ip(), %issue, "name server failed check");
        }

        issues
    }

    /// Fail with [`UltraError::Validation`] if the record has any issue
    pub fn validate(&self, ns: &NameServer) -> Result<()> {
        let issues = self.check(ns);
        if issues.is_empty() {
            Ok(())
        } else {
            Err(UltraError::Validation(issues))
        }
    }
}

impl NameServer {
    /// Validate with the default requirements
    pub fn validate(&self) -> Result<()> {
        Validator::default().validate(self)
    }

    /// Decode the TSIG key value from base64
    ///
    /// Returns `Ok(None)` when no key value is set.
    pub fn tsig_secret_bytes(&self) -> Result<Option<Vec<u8>>> {
        self.tsig_key_value()
            .map(decode_secret)
            .transpose()
            .map_err(UltraError::InvalidTsigKeyValue)
    }
}

fn decode_secret(value: &str) -> std::result::Result<Vec<u8>, String> {
    let bytes = B64
        .decode(value)
        .map_err(|e| format!("not base64: {e}"))?;
    if bytes.is_empty() {
        return Err("empty secret".to_string());
    }
    Ok(bytes)
}

/// Check a TSIG key name is a syntactically valid DNS name.
///
/// One trailing dot is allowed. The root name alone is rejected.
fn is_valid_key_name(name: &str) -> bool {
    let name = name.strip_suffix('.').unwrap_or(name);
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return false;
    }
    name.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LEN
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "c2VjcmV0LWtleS1tYXRlcmlhbA==";

    fn good() -> NameServer {
        NameServer::with_tsig("192.0.2.53", "transfer-key.example.com.", SECRET)
    }

    #[test]
    fn well_formed_record_passes() {
        assert!(Validator::default().check(&good()).is_empty());
        assert!(good().validate().is_ok());
        assert!(NameServer::with_ip("2001:db8::1").validate().is_ok());
    }

    #[test]
    fn missing_ip_depends_on_requirement() {
        let ns = NameServer::empty();
        assert_eq!(
            Validator::default().check(&ns),
            vec![ValidationIssue::MissingIp]
        );
        assert!(Validator::new().require_ip(false).check(&ns).is_empty());
    }

    #[test]
    fn bad_ip_is_reported() {
        let mut ns = good();
        ns.set_ip(Some("192.0.2.256".into()));
        assert_eq!(
            Validator::default().check(&ns),
            vec![ValidationIssue::InvalidIp("192.0.2.256".into())]
        );
    }

    #[test]
    fn half_a_tsig_key_is_reported() {
        let ns = NameServer::new(Some("192.0.2.53".into()), Some("key".into()), None);
        assert_eq!(
            Validator::default().check(&ns),
            vec![ValidationIssue::IncompleteTsig]
        );

        let ns = NameServer::new(Some("192.0.2.53".into()), None, Some(SECRET.into()));
        assert_eq!(
            Validator::default().check(&ns),
            vec![ValidationIssue::IncompleteTsig]
        );
    }

    #[test]
    fn tsig_required_on_request() {
        let ns = NameServer::with_ip("192.0.2.53");
        assert_eq!(
            Validator::new().require_tsig(true).check(&ns),
            vec![ValidationIssue::MissingTsig]
        );
        assert!(Validator::new().require_tsig(true).check(&good()).is_empty());
    }

    #[test]
    fn key_name_rules() {
        assert!(is_valid_key_name("key"));
        assert!(is_valid_key_name("key.example."));
        assert!(is_valid_key_name("_xfr.key-1.example"));
        assert!(!is_valid_key_name(""));
        assert!(!is_valid_key_name("."));
        assert!(!is_valid_key_name("a..b"));
        assert!(!is_valid_key_name("-key.example"));
        assert!(!is_valid_key_name("key-.example"));
        assert!(!is_valid_key_name("key name"));
        assert!(!is_valid_key_name(&"a".repeat(64)));
        assert!(is_valid_key_name(&"a".repeat(63)));

        let long = vec!["abcdefghi"; 26].join(".");
        assert!(long.len() > MAX_NAME_LEN);
        assert!(!is_valid_key_name(&long));
    }

    #[test]
    fn bad_key_value_is_reported() {
        let mut ns = good();
        ns.set_tsig_key_value(Some("not base64!".into()));
        let issues = Validator::default().check(&ns);
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], ValidationIssue::InvalidTsigKeyValue(_)));

        ns.set_tsig_key_value(Some(String::new()));
        assert_eq!(
            Validator::default().check(&ns),
            vec![ValidationIssue::InvalidTsigKeyValue("empty secret".into())]
        );
    }

    #[test]
    fn surrounding_whitespace_is_not_base64() {
        let ns = NameServer::with_tsig("192.0.2.1", "key", "  c2VjcmV0\n");
        let issues = Validator::default().check(&ns);
        assert_eq!(issues.len(), 1);
        assert!(matches!(issues[0], ValidationIssue::InvalidTsigKeyValue(_)));
        assert!(matches!(
            ns.tsig_secret_bytes(),
            Err(UltraError::InvalidTsigKeyValue(_))
        ));

        let trimmed = NameServer::with_tsig("192.0.2.1", "key", "c2VjcmV0");
        assert!(Validator::default().check(&trimmed).is_empty());
    }

    #[test]
    fn every_issue_is_collected() {
        let ns = NameServer::new(Some("nope".into()), Some("bad name".into()), None);
        let err = ns.validate().unwrap_err();
        assert_eq!(
            err.issues(),
            &[
                ValidationIssue::InvalidIp("nope".into()),
                ValidationIssue::IncompleteTsig,
                ValidationIssue::InvalidTsigKeyName("bad name".into()),
            ]
        );
    }

    #[test]
    fn secret_bytes_decode() {
        assert_eq!(
            good().tsig_secret_bytes().unwrap().as_deref(),
            Some(&b"secret-key-material"[..])
        );
        assert_eq!(NameServer::empty().tsig_secret_bytes().unwrap(), None);

        let ns = NameServer::new(None, None, Some("%%%".into()));
        assert!(matches!(
            ns.tsig_secret_bytes(),
            Err(UltraError::InvalidTsigKeyValue(_))
        ));
    }
}
