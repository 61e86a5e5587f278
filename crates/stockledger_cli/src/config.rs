//! # CLI Configuration
//!
//! Optional `stockledger.toml` next to the binary, loaded once at startup.
//! A missing file means defaults; a malformed file logs a warning and
//! falls back to defaults rather than refusing to start.

use std::path::Path;

use serde::Deserialize;
use stockledger_core::DEFAULT_SLOT_LIMIT;

/// Top-level CLI configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Ledger tuning.
    pub ledger: LedgerConfig,
}

/// Ledger section of the config file.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LedgerConfig {
    /// Ceiling on the number of slots a ledger may reserve.
    pub capacity_limit: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            capacity_limit: DEFAULT_SLOT_LIMIT,
        }
    }
}

impl CliConfig {
    /// Loads the config from `path`, falling back to defaults.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        let Ok(raw) = std::fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        };
        match toml::from_str(&raw) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "malformed config, using defaults");
                Self::default()
            }
        }
    }
}
