//! # Tariff Desk Library
//!
//! Core library for the Tariff Desk terminal application.
//! This is the main entry point that resolves configuration, opens the
//! database and runs either one action or the interactive shell.
//!
//! ## Module Organization
//! ```text
//! tariff_desktop_lib/
//! ├── lib.rs            ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs        ◄─── State type exports
//! │   ├── config.rs     ◄─── Configuration state
//! │   └── session.rs    ◄─── Database, active partition, current view
//! ├── commands/
//! │   ├── mod.rs        ◄─── Action enum and dispatch
//! │   ├── tariff.rs     ◄─── add, remove, sort, list
//! │   ├── transfer.rs   ◄─── save, load
//! │   └── partition.rs  ◄─── partitions, use
//! ├── console.rs        ◄─── Prompts and the shell loop
//! └── error.rs          ◄─── API error type for actions
//! ```

pub mod commands;
pub mod console;
pub mod error;
pub mod state;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

use commands::{dispatch, Action};
use console::StdConsole;
use error::StartupError;
use state::{ConfigState, PartitionMode, Session};
use tariff_db::{Database, DbConfig, PartitionName};

/// Command line of `tariff-desk`.
#[derive(Debug, Parser)]
#[command(name = "tariff-desk", version, about = "Keep a book of travel tariffs")]
pub struct Cli {
    /// SQLite database file [env: TARIFF_DB_PATH]
    #[arg(long, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Partition to start on [env: TARIFF_PARTITION]
    #[arg(long, value_name = "NAME")]
    pub partition: Option<String>,

    /// Where added tariffs go [env: TARIFF_PARTITION_MODE]
    #[arg(long, value_enum, value_name = "MODE")]
    pub partition_mode: Option<PartitionMode>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level command: one action, or the shell.
#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(flatten)]
    Action(Action),

    /// Interactive session (the default)
    Shell,
}

impl Cli {
    /// Layers the flags over `config`.
    pub fn apply(&self, mut config: ConfigState) -> ConfigState {
        if let Some(path) = &self.db {
            config.database_path = path.clone();
        }
        if let Some(partition) = &self.partition {
            config.default_partition = partition.clone();
        }
        if let Some(mode) = self.partition_mode {
            config.partition_mode = mode;
        }
        config
    }
}

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Parse Command Line ───────────────────────────────────────────────► │
/// │                                                                         │
/// │  2. Resolve Configuration ────────────────────────────────────────────► │
/// │     • defaults → TARIFF_* environment → flags                           │
/// │                                                                         │
/// │  3. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • RUST_LOG, else TARIFF_LOG, else "warn"                            │
/// │     • report settings that were ignored                                 │
/// │                                                                         │
/// │  4. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, file created if missing                     │
/// │     • failure here is fatal: exit status 1                              │
/// │                                                                         │
/// │  5. Open Session ─────────────────────────────────────────────────────► │
/// │     • ensure the starting partition's table, load it                    │
/// │                                                                         │
/// │  6. Run ──────────────────────────────────────────────────────────────► │
/// │     • one action from the command line, or the shell                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.apply(ConfigState::from_env());

    init_tracing(&config.log_filter);
    for (variable, value) in &config.rejected {
        warn!(variable = %variable, value = %value, "Ignoring invalid setting");
    }
    debug!(?config, "Configuration resolved");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "Failed to start the async runtime");
            eprintln!("Error: failed to start the async runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    runtime.block_on(run_app(cli.command, config))
}

async fn run_app(command: Option<Command>, config: ConfigState) -> ExitCode {
    let mut session = match open_session(&config).await {
        Ok(session) => session,
        Err(e) => {
            error!(path = %config.database_path.display(), "{}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut console = StdConsole::new();

    let code = match command.unwrap_or(Command::Shell) {
        Command::Shell => match console::run_shell(&mut session, &mut console).await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(error = %e, "Shell input failed");
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        },
        Command::Action(action) => match dispatch(&mut session, action, &mut console).await {
            Ok(outcome) => {
                println!("{}", outcome);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                ExitCode::FAILURE
            }
        },
    };

    session.db().close().await;
    code
}

/// Connects to the configured database and opens a session on the starting
/// partition.
pub async fn open_session(config: &ConfigState) -> Result<Session, StartupError> {
    let partition: PartitionName = config
        .default_partition
        .parse()
        .map_err(StartupError::InvalidPartition)?;

    if let Some(dir) = config.database_path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir).map_err(|source| StartupError::DataDirectory {
                dir: dir.to_path_buf(),
                source,
            })?;
        }
    }

    let db_config = DbConfig::new(&config.database_path).default_partition(partition.clone());
    let db = Database::new(db_config).await?;
    info!(path = %config.database_path.display(), "Database connected");

    Ok(Session::open(db, partition, config.partition_mode).await?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tariff_db=trace` - Show trace for the store only
/// - Otherwise `default_filter` (from `TARIFF_LOG`, default `warn`)
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "tariff-desk",
            "--db",
            "/tmp/other.db",
            "--partition-mode",
            "per-direction",
            "list",
        ])
        .unwrap();

        let config = cli.apply(ConfigState::default());
        assert_eq!(config.database_path, PathBuf::from("/tmp/other.db"));
        assert_eq!(config.partition_mode, PartitionMode::PerDirection);
        assert_eq!(config.default_partition, "tariffs");
        assert!(matches!(cli.command, Some(Command::Action(Action::List))));
    }

    #[test]
    fn test_no_command_means_shell() {
        let cli = Cli::try_parse_from(["tariff-desk"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[tokio::test]
    async fn test_open_session_creates_database_directory() {
        let dir = tempdir().unwrap();
        let config = ConfigState {
            database_path: dir.path().join("nested").join("tariffs.db"),
            ..ConfigState::default()
        };

        let session = open_session(&config).await.unwrap();
        assert!(config.database_path.exists());
        session.db().close().await;
    }

    #[tokio::test]
    async fn test_open_session_rejects_bad_partition() {
        let dir = tempdir().unwrap();
        let config = ConfigState {
            database_path: dir.path().join("tariffs.db"),
            default_partition: "1st".to_string(),
            ..ConfigState::default()
        };

        let err = open_session(&config).await.unwrap_err();
        assert!(matches!(err, StartupError::InvalidPartition(_)));
        assert!(err.to_string().starts_with("Invalid starting partition: "));
        assert!(!config.database_path.exists());
    }
}
