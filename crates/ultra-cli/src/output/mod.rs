//! Output formatting for different formats.

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tabled::settings::Style;
use tabled::{Table, Tabled};
use ultra_core::NameServer;

use crate::input::Records;

/// Placeholder for unset fields in tables.
const UNSET: &str = "-";

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed tables with colors
    #[default]
    Pretty,
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// YAML output
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "table" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json, csv, yaml",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "TSIG Key")]
    tsig_key: String,
    #[tabled(rename = "TSIG Key Value")]
    tsig_key_value: String,
}

/// Copy of `ns` with the key value masked unless `show_secrets` is set.
pub fn for_display(ns: &NameServer, show_secrets: bool) -> NameServer {
    if show_secrets {
        return ns.clone();
    }
    let mut shown = ns.clone();
    shown.set_tsig_key_value(ns.masked_tsig_key_value());
    shown
}

/// Render records in the requested format.
///
/// Machine formats always carry the real key value; only the pretty table masks it.
pub fn render_records(records: &Records, format: OutputFormat, show_secrets: bool) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(records)?),
        OutputFormat::Csv => render_csv(records.as_slice()),
        OutputFormat::Pretty => Ok(render_table(records.as_slice(), show_secrets)),
    }
}

/// Print rendered output, adding a newline only if it lacks one.
pub fn emit(rendered: &str) {
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
}

/// Write a header and rows as CSV, quoting fields as needed.
pub fn to_csv<R, F>(header: &[&str], rows: impl IntoIterator<Item = R>) -> Result<String>
where
    R: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(String::from_utf8(bytes)?)
}

fn render_csv(records: &[NameServer]) -> Result<String> {
    to_csv(
        &["ip", "tsigKey", "tsigKeyValue"],
        records.iter().map(|ns| {
            [
                ns.ip().unwrap_or_default(),
                ns.tsig_key().unwrap_or_default(),
                ns.tsig_key_value().unwrap_or_default(),
            ]
        }),
    )
}

fn render_table(records: &[NameServer], show_secrets: bool) -> String {
    let rows = records.iter().enumerate().map(|(i, ns)| {
        let shown = for_display(ns, show_secrets);
        Row {
            index: i + 1,
            ip: shown.ip().unwrap_or(UNSET).to_string(),
            tsig_key: shown.tsig_key().unwrap_or(UNSET).to_string(),
            tsig_key_value: shown.tsig_key_value().unwrap_or(UNSET).to_string(),
        }
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
