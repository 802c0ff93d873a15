use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Result;

/// Name server of a zone, with the TSIG key used to talk to it.
///
/// No field is validated here; see [`crate::Validator`]. Unset fields are
/// left out of the JSON form entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameServer {
    /// IP address of the name server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,

    /// Name of the TSIG key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsig_key: Option<String>,

    /// The TSIG key's value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsig_key_value: Option<String>,
}

impl NameServer {
    /// Create a record from all three fields, taken as-is
    #[must_use]
    pub const fn new(
        ip: Option<String>,
        tsig_key: Option<String>,
        tsig_key_value: Option<String>,
    ) -> Self {
        Self {
            ip,
            tsig_key,
            tsig_key_value,
        }
    }

    /// Create a record with every field unset
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(None, None, None)
    }

    /// Create a record with only an address
    #[must_use]
    pub fn with_ip(ip: impl Into<String>) -> Self {
        Self::new(Some(ip.into()), None, None)
    }

    /// Create a record with an address and a TSIG key
    #[must_use]
    pub fn with_tsig(
        ip: impl Into<String>,
        tsig_key: impl Into<String>,
        tsig_key_value: impl Into<String>,
    ) -> Self {
        Self::new(
            Some(ip.into()),
            Some(tsig_key.into()),
            Some(tsig_key_value.into()),
        )
    }

    /// Get the IP address
    #[must_use]
    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    /// Set the IP address
    pub fn set_ip(&mut self, ip: Option<String>) {
        self.ip = ip;
    }

    /// Get the TSIG key name
    #[must_use]
    pub fn tsig_key(&self) -> Option<&str> {
        self.tsig_key.as_deref()
    }

    /// Set the TSIG key name
    pub fn set_tsig_key(&mut self, tsig_key: Option<String>) {
        self.tsig_key = tsig_key;
    }

    /// Get the TSIG key value
    #[must_use]
    pub fn tsig_key_value(&self) -> Option<&str> {
        self.tsig_key_value.as_deref()
    }

    /// Set the TSIG key value
    pub fn set_tsig_key_value(&mut self, tsig_key_value: Option<String>) {
        self.tsig_key_value = tsig_key_value;
    }

    /// Returns true if both the TSIG key name and value are set
    #[must_use]
    pub const fn has_tsig(&self) -> bool {
        self.tsig_key.is_some() && self.tsig_key_value.is_some()
    }

    /// Returns true if no field is set
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.ip.is_none() && self.tsig_key.is_none() && self.tsig_key_value.is_none()
    }

    /// The TSIG key value with everything but its ends hidden
    #[must_use]
    pub fn masked_tsig_key_value(&self) -> Option<String> {
        self.tsig_key_value.as_deref().map(mask_secret)
    }

    /// Hash of the three fields.
    ///
    /// Equal records always have equal fingerprints. The value is stable for
    /// the life of the process only.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// JSON names of the fields whose values differ from `other`
    #[must_use]
    pub fn differing_fields(&self, other: &Self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.ip != other.ip {
            fields.push("ip");
        }
        if self.tsig_key != other.tsig_key {
            fields.push("tsigKey");
        }
        if self.tsig_key_value != other.tsig_key_value {
            fields.push("tsigKeyValue");
        }
        fields
    }

    /// Parse a record from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to compact JSON, leaving out unset fields
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for NameServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            ("ip", self.ip()),
            ("tsigKey", self.tsig_key()),
            ("tsigKeyValue", self.tsig_key_value()),
        ];

        write!(f, "NameServer{{")?;
        let mut sep = "";
        for (name, value) in fields {
            if let Some(value) = value {
                write!(f, "{sep}{name}={value}")?;
                sep = ", ";
            }
        }
        write!(f, "}}")
    }
}

fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "****".to_string()
    }
}
