//! # ultra-cli
//!
//! Command-line interface for UltraDNS name server records.
//!
//! ## Features
//!
//! - **Build records**: `ultra nameserver new` from flags
//! - **Inspect**: `ultra nameserver show` reads JSON from a file or stdin
//! - **Validate**: address, TSIG key name and base64 key value checks
//! - **Compare**: structural equality and fingerprints of two records
//! - **Multiple output formats**: Pretty tables, JSON, CSV, YAML

pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod output;

pub use cli::run;
