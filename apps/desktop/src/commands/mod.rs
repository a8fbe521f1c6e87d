//! # Commands Module
//!
//! Every user action, and the dispatch from a parsed [`Action`] to its
//! handler.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── Action, Outcome, dispatch
//! ├── tariff.rs     ◄─── add, remove, sort, list
//! ├── transfer.rs   ◄─── save, load
//! └── partition.rs  ◄─── partitions, use
//! ```
//!
//! ## How Actions Run
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "add Paris 500 10"  (argv or a shell line)                            │
//! │         │                                                               │
//! │         │ clap                                                          │
//! │         ▼                                                               │
//! │  Action::Add { direction, price, discount }                             │
//! │         │                                                               │
//! │         │ dispatch(session, action, console).await                      │
//! │         ▼                                                               │
//! │  tariff::add_tariff ──► Result<Outcome, ApiError>                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Outcome printed on stdout, ApiError on stderr                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Each handler runs to completion, store calls included, before the next
//! action is read.

pub mod partition;
pub mod tariff;
pub mod transfer;

use std::fmt;
use std::path::PathBuf;

use clap::Subcommand;
use tariff_core::view::TariffTable;
use tracing::debug;

use crate::console::{collect_entry, Console};
use crate::error::ApiResult;
use crate::state::Session;

use partition::PartitionSummary;
use tariff::Removal;
use transfer::{Loaded, Saved};

/// A user action, shared by the command line and the shell.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Action {
    /// Add a tariff; missing values are asked for
    Add {
        /// Route or destination, letters only
        direction: Option<String>,

        /// Base price, 0 to 100000
        #[arg(allow_negative_numbers = true)]
        price: Option<String>,

        /// Discount in percent, 0 to 100
        #[arg(allow_negative_numbers = true)]
        discount: Option<String>,
    },

    /// Remove every tariff sharing a direction with the given rows
    Remove {
        /// Row numbers of the last shown table, starting at 1
        rows: Vec<usize>,
    },

    /// Show tariffs ordered by final price, cheapest first
    Sort,

    /// Show tariffs in the order they were added
    List,

    /// Save the active partition to a JSON file
    Save {
        file: PathBuf,
    },

    /// Replace the active partition with the tariffs in a JSON file
    Load {
        file: PathBuf,
    },

    /// List partitions, marking the active one
    Partitions,

    /// Switch to another partition, creating it if needed
    Use {
        partition: String,
    },
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add { .. } => "add",
            Action::Remove { .. } => "remove",
            Action::Sort => "sort",
            Action::List => "list",
            Action::Save { .. } => "save",
            Action::Load { .. } => "load",
            Action::Partitions => "partitions",
            Action::Use { .. } => "use",
        }
    }
}

/// What an action produced, ready to print.
#[derive(Debug, Clone)]
pub enum Outcome {
    Table(TariffTable),
    Removed(Removal),
    Saved(Saved),
    Loaded(Loaded),
    Partitions(Vec<PartitionSummary>),
    /// Input ended while an add was asking for values.
    Cancelled,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Table(table) => write!(f, "{}", table),
            Outcome::Removed(removal) => {
                writeln!(
                    f,
                    "Removed {} tariff(s): {}",
                    removal.removed,
                    removal.directions.join(", ")
                )?;
                write!(f, "{}", removal.table)
            }
            Outcome::Saved(saved) => write!(
                f,
                "Tariffs saved to JSON file. ({} written to {})",
                saved.count,
                saved.path.display()
            ),
            Outcome::Loaded(loaded) => {
                writeln!(
                    f,
                    "Tariffs loaded from JSON file. ({} read from {})",
                    loaded.count,
                    loaded.path.display()
                )?;
                write!(f, "{}", loaded.table)
            }
            Outcome::Partitions(summaries) => {
                let lines: Vec<String> = summaries.iter().map(|s| s.to_string()).collect();
                write!(f, "{}", lines.join("\n"))
            }
            Outcome::Cancelled => write!(f, "Cancelled."),
        }
    }
}

/// Runs one action against the session.
///
/// `console` is only used by `add`, to ask for values that were not given.
pub async fn dispatch<C: Console>(
    session: &mut Session,
    action: Action,
    console: &mut C,
) -> ApiResult<Outcome> {
    debug!(
        action = action.name(),
        partition = %session.active_partition(),
        "Dispatching action"
    );

    match action {
        Action::Add {
            direction,
            price,
            discount,
        } => match collect_entry(console, direction, price, discount)? {
            Some(input) => Ok(Outcome::Table(tariff::add_tariff(session, input).await?)),
            None => Ok(Outcome::Cancelled),
        },
        Action::Remove { rows } => Ok(Outcome::Removed(
            tariff::remove_tariffs(session, &rows).await?,
        )),
        Action::Sort => Ok(Outcome::Table(tariff::sort_tariffs(session).await?)),
        Action::List => Ok(Outcome::Table(tariff::list_tariffs(session).await?)),
        Action::Save { file } => Ok(Outcome::Saved(
            transfer::save_to_file(session, &file).await?,
        )),
        Action::Load { file } => Ok(Outcome::Loaded(
            transfer::load_from_file(session, &file).await?,
        )),
        Action::Partitions => Ok(Outcome::Partitions(
            partition::list_partitions(session).await?,
        )),
        Action::Use { partition } => Ok(Outcome::Table(
            partition::use_partition(session, &partition).await?,
        )),
    }
}
