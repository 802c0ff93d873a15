//! Configuration management.

use anyhow::{Context as _, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use ultra_core::Validator;

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Default output format.
    pub output_format: Option<OutputFormat>,

    /// Print TSIG key values in full (as if --show-secrets was passed).
    #[serde(default)]
    pub show_secrets: bool,

    /// Requirements applied by `nameserver validate`.
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Which fields a record must carry to pass validation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Reject records without an IP address.
    #[serde(default = "default_true")]
    pub require_ip: bool,

    /// Reject records without a TSIG key.
    #[serde(default)]
    pub require_tsig: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            require_ip: true,
            require_tsig: false,
        }
    }
}

impl ValidationConfig {
    /// Build the validator these settings describe.
    pub const fn validator(&self) -> Validator {
        Validator {
            require_ip: self.require_ip,
            require_tsig: self.require_tsig,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Get the default config file path.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("biz", "neustar", "ultra")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    fn resolve(path: Option<&Path>) -> Result<PathBuf> {
        match path {
            Some(path) => Ok(path.to_path_buf()),
            None => Self::default_path(),
        }
    }

    /// Load configuration from `path`, or the default location.
    ///
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = Self::resolve(path)?;

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save configuration to `path`, or the default location.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let path = Self::resolve(path)?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}
