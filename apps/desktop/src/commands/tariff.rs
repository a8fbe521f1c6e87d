//! # Tariff Commands
//!
//! Handlers for adding, removing and ordering the tariffs of the active
//! partition.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add ──► validated TariffInput ──► final price frozen ──► INSERT        │
//! │                                                            │            │
//! │  remove 2 ──► view[1].direction ──► DELETE WHERE direction │            │
//! │                                                            ▼            │
//! │                                                   view = select_all     │
//! │                                                                         │
//! │  sort ──► view = select_sorted_by_final_price (storage untouched)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tariff_core::view::TariffTable;
use tariff_core::TariffInput;
use tariff_db::PartitionName;
use tracing::{debug, info};

use crate::error::ApiResult;
use crate::state::{PartitionMode, Session};

/// Result of a remove action.
#[derive(Debug, Clone)]
pub struct Removal {
    /// Directions whose rows were deleted, in the order they were processed.
    pub directions: Vec<String>,

    /// Total rows deleted across all directions.
    pub removed: u64,

    /// Active partition after the delete.
    pub table: TariffTable,
}

/// Adds one tariff to the store and shows the partition it landed in.
///
/// ## Behavior
/// - The final price is computed once here and stored with the row
/// - In per-direction mode the session first moves to the direction's
///   partition (`Paris` → `table_paris`), creating it if needed
///
/// ## Returns
/// The partition's rows in storage order, new row last
pub async fn add_tariff(session: &mut Session, input: TariffInput) -> ApiResult<TariffTable> {
    if session.mode() == PartitionMode::PerDirection {
        let target = PartitionName::for_direction(&input.direction)?;
        session.switch_partition(target).await?;
    }

    let entry = input.into_entry();
    let record = session.repo().insert(&entry).await?;

    info!(
        partition = %session.active_partition(),
        id = record.id,
        direction = %record.direction,
        final_price = record.final_price,
        "Tariff added"
    );

    Ok(session.refresh().await?)
}

/// Removes every tariff sharing a direction with the selected rows.
///
/// ## Arguments
/// * `rows` - 1-based row numbers of the last rendered table
///
/// ## Errors
/// - `NO_SELECTION` when `rows` is empty
/// - `INVALID_SELECTION` when a row number is outside the table; nothing
///   is deleted in that case
pub async fn remove_tariffs(session: &mut Session, rows: &[usize]) -> ApiResult<Removal> {
    let directions = session.selected_directions(rows)?;
    let repo = session.repo();

    let mut removed = 0;
    for direction in &directions {
        let count = repo.delete_by_direction(direction).await?;
        debug!(direction = %direction, count, "Removed direction");
        removed += count;
    }

    info!(
        partition = %session.active_partition(),
        removed,
        directions = directions.len(),
        "Tariffs removed"
    );

    let table = session.refresh().await?;
    Ok(Removal {
        directions,
        removed,
        table,
    })
}

/// Shows the active partition ordered by final price, cheapest first.
///
/// Storage order is not changed; the sorted table becomes the view that
/// row numbers refer to.
pub async fn sort_tariffs(session: &mut Session) -> ApiResult<TariffTable> {
    let records = session.repo().select_sorted_by_final_price().await?;
    debug!(count = records.len(), "Sorted tariffs");
    Ok(session.show(records))
}

/// Shows the active partition in storage order.
pub async fn list_tariffs(session: &mut Session) -> ApiResult<TariffTable> {
    Ok(session.refresh().await?)
}
