//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Build, inspect, validate and compare UltraDNS name server records
///
/// Records are JSON objects with the fields ip, tsigKey and tsigKeyValue.
/// Files may hold a single record or an array of records.
#[derive(Parser, Debug)]
#[command(name = "ultra")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print TSIG key values in full in pretty output
    #[arg(long, global = true)]
    pub show_secrets: bool,

    /// Config file to use instead of the default location
    #[arg(long, env = "ULTRA_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Name server records
    #[command(alias = "ns")]
    Nameserver(NameserverArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Nameserver command
// ============================================================================

#[derive(Args, Debug)]
pub struct NameserverArgs {
    #[command(subcommand)]
    pub command: NameserverCommands,
}

#[derive(Subcommand, Debug)]
pub enum NameserverCommands {
    /// Build a record from flags and print it
    New {
        /// IP address of the name server
        #[arg(long)]
        ip: Option<String>,

        /// Name of the TSIG key
        #[arg(long)]
        tsig_key: Option<String>,

        /// Base64 value of the TSIG key
        #[arg(long)]
        tsig_key_value: Option<String>,

        /// Refuse to print the record if it fails validation
        #[arg(long)]
        validate: bool,
    },

    /// Print the records in a file (or stdin)
    Show {
        /// JSON file to read; stdin when omitted or "-"
        file: Option<String>,
    },

    /// Check the records in a file (or stdin)
    Validate {
        /// JSON file to read; stdin when omitted or "-"
        file: Option<String>,

        /// Reject records without a TSIG key
        #[arg(long)]
        require_tsig: bool,

        /// Accept records without an IP address
        #[arg(long)]
        allow_missing_ip: bool,
    },

    /// Compare two records
    Compare {
        /// First record
        a: String,

        /// Second record
        b: String,
    },
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,

        /// Value to set
        value: String,
    },

    /// Show configuration file path
    Path,
}
