//! Configuration management for vigia.
//!
//! Configuration is loaded with figment from TOML files, environment
//! variables, and defaults, then validated before use.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::guard::DEFAULT_DEADLINE_MS;
use crate::roster::{RankEntry, RankTable};
use crate::scope::{ScopeFilter, GLOBAL_STATION_ALIASES};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "vigia";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `VIGIA_`)
/// 2. TOML config file at `~/.config/vigia/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Roster configuration.
    pub roster: RosterConfig,
    /// Scope configuration.
    pub scope: ScopeConfig,
    /// Fetch configuration.
    pub fetch: FetchConfig,
    /// Data configuration.
    pub data: DataConfig,
}

/// Roster-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RosterConfig {
    /// Custom keyword-to-rank entries replacing the built-in table.
    /// Leave empty to use the built-in scheme.
    pub rank_overrides: Vec<RankEntry>,
}

/// Scope-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeConfig {
    /// Station names that grant visibility over every station.
    pub global_aliases: Vec<String>,
}

/// Fetch-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Deadline applied to dataset loads, in milliseconds.
    pub deadline_ms: u64,
}

/// Data-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory datasets are resolved against.
    /// Defaults to `~/.local/share/vigia`.
    pub dataset_dir: Option<PathBuf>,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            global_aliases: GLOBAL_STATION_ALIASES.iter().map(|s| (*s).into()).collect(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            deadline_ms: DEFAULT_DEADLINE_MS,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("VIGIA_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.scope.global_aliases.is_empty() {
            return Err(Error::config_validation(
                "scope.global_aliases must not be empty",
            ));
        }

        for alias in &self.scope.global_aliases {
            if alias.trim().is_empty() {
                return Err(Error::config_validation(
                    "scope.global_aliases must not contain blank entries",
                ));
            }
        }

        for entry in &self.roster.rank_overrides {
            if entry.keyword.trim().is_empty() {
                return Err(Error::config_validation(
                    "roster.rank_overrides must not contain blank keywords",
                ));
            }
        }

        Ok(())
    }

    /// Get the dataset directory, resolving defaults if not set.
    #[must_use]
    pub fn dataset_dir(&self) -> PathBuf {
        self.data
            .dataset_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Get the fetch deadline as a Duration.
    #[must_use]
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.fetch.deadline_ms)
    }

    /// Build the rank table in effect: the built-in one, or the configured
    /// overrides when present.
    #[must_use]
    pub fn rank_table(&self) -> RankTable {
        if self.roster.rank_overrides.is_empty() {
            RankTable::builtin()
        } else {
            RankTable::with_entries(self.roster.rank_overrides.clone())
        }
    }

    /// Build the scope filter in effect.
    #[must_use]
    pub fn scope_filter(&self) -> ScopeFilter {
        ScopeFilter::with_aliases(self.scope.global_aliases.clone())
    }
}
