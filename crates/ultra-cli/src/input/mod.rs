//! Reading name server records from files or stdin.

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::debug;
use ultra_core::NameServer;

/// Records as found in the input: one object or an array of them.
///
/// Output keeps the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Records {
    /// A JSON array of records
    Many(Vec<NameServer>),
    /// A single JSON object
    One(NameServer),
}

impl Records {
    /// All records as a slice.
    pub fn as_slice(&self) -> &[NameServer] {
        match self {
            Self::Many(records) => records,
            Self::One(ns) => std::slice::from_ref(ns),
        }
    }

    /// Exactly one record, or an error naming `source`.
    pub fn into_single(self, source: &str) -> Result<NameServer> {
        match self {
            Self::One(ns) => Ok(ns),
            Self::Many(mut records) if records.len() == 1 => Ok(records.remove(0)),
            Self::Many(records) => anyhow::bail!(
                "{source}: expected a single name server record, found {}",
                records.len()
            ),
        }
    }
}

/// Parse records from JSON text.
pub fn parse_records(json: &str) -> Result<Records> {
    serde_json::from_str(json)
        .context("expected a name server object or an array of name server objects")
}

/// Read records from `path`, or stdin when `path` is `None` or `-`.
pub fn read_records(path: Option<&str>) -> Result<Records> {
    let (source, content) = match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            ("stdin".to_string(), buf)
        }
        Some(path) => {
            let expanded = shellexpand::full(path)
                .with_context(|| format!("expanding path {path}"))?
                .into_owned();
            let content = std::fs::read_to_string(&expanded)
                .with_context(|| format!("reading {expanded}"))?;
            (expanded, content)
        }
    };

    let records = parse_records(&content).with_context(|| format!("parsing {source}"))?;
    debug!(%source, count = records.as_slice().len(), "read name server records");
    Ok(records)
}
