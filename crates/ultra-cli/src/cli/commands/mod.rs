//! Command implementations.

pub mod config;
pub mod nameserver;

use std::path::{Path, PathBuf};

use ultra_core::Validator;

use crate::config::Config;
use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Print TSIG key values unmasked
    pub show_secrets: bool,

    /// Config file given on the command line, if any
    pub config_path: Option<PathBuf>,

    /// Loaded configuration
    pub config: Config,
}

impl Context {
    /// The config file this invocation reads and writes.
    pub fn config_file(&self) -> anyhow::Result<PathBuf> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => Config::default_path(),
        }
    }

    /// Config path override as a borrowed path.
    pub fn config_override(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Validator with the configured requirements.
    pub fn validator(&self) -> Validator {
        self.config.validation.validator()
    }
}
