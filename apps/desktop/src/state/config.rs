//! # Configuration State
//!
//! Settings resolved once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--db`, `--partition`, `--partition-mode`)
//! 2. Environment variables (`TARIFF_*`)
//! 3. Defaults (this file)
//!
//! Read-only after startup.

use clap::ValueEnum;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::str::FromStr;
use tariff_core::DEFAULT_PARTITION;

/// File name of the database inside the data directory.
const DATABASE_FILE: &str = "tariffs.db";

/// Log filter when neither `RUST_LOG` nor `TARIFF_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Where new tariffs land.
///
/// ```text
/// single         every add → active partition
/// per-direction  add "Paris" → switch to table_paris, insert there
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PartitionMode {
    /// One partition for all tariffs.
    #[default]
    Single,

    /// Each add moves the session to the direction's own partition.
    PerDirection,
}

impl FromStr for PartitionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <PartitionMode as ValueEnum>::from_str(s.trim(), true)
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigState {
    /// SQLite file holding every partition.
    pub database_path: PathBuf,

    /// Partition the session starts on.
    pub default_partition: String,

    /// Routing of added tariffs.
    pub partition_mode: PartitionMode,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Environment settings that were set but could not be used, as
    /// `(variable, value)`. Reported once logging is up.
    pub rejected: Vec<(String, String)>,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Database: `<data dir>/tariffs.db`, or `./tariffs.db` when the
    ///   platform has no data directory
    /// - Partition: `tariffs`
    /// - Mode: single
    /// - Logging: `warn`
    fn default() -> Self {
        ConfigState {
            database_path: default_database_path(),
            default_partition: DEFAULT_PARTITION.to_string(),
            partition_mode: PartitionMode::Single,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            rejected: Vec::new(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `TARIFF_DB_PATH`: database file
    /// - `TARIFF_PARTITION`: starting partition
    /// - `TARIFF_PARTITION_MODE`: `single` or `per-direction`
    /// - `TARIFF_LOG`: log filter (e.g. `info,tariff_db=debug`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("TARIFF_DB_PATH") {
            config.database_path = PathBuf::from(path);
        }

        if let Some(partition) = lookup("TARIFF_PARTITION") {
            config.default_partition = partition;
        }

        if let Some(mode) = lookup("TARIFF_PARTITION_MODE") {
            match mode.parse() {
                Ok(parsed) => config.partition_mode = parsed,
                Err(_) => config
                    .rejected
                    .push(("TARIFF_PARTITION_MODE".to_string(), mode)),
            }
        }

        if let Some(filter) = lookup("TARIFF_LOG") {
            config.log_filter = filter;
        }

        config
    }
}

/// Platform data directory for the database.
///
/// - **Linux**: `~/.local/share/tariff-desk/tariffs.db`
/// - **macOS**: `~/Library/Application Support/com.tariff.desk/tariffs.db`
/// - **Windows**: `%APPDATA%\tariff\desk\data\tariffs.db`
fn default_database_path() -> PathBuf {
    match ProjectDirs::from("com", "tariff", "desk") {
        Some(dirs) => dirs.data_dir().join(DATABASE_FILE),
        None => PathBuf::from(DATABASE_FILE),
    }
}
