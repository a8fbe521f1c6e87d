//! # Session State
//!
//! Everything one run of the desk works against: the open database, the
//! active partition and the rows last shown to the user.
//!
//! ## Selection Model
//! ```text
//! list / sort / add / load ──► view = rows as rendered
//!                                 │
//! remove 2 3 ─────────────────────┘ row numbers are 1-based positions in view
//! ```
//! A row number always refers to what the user is looking at, so `remove`
//! after `sort` removes the row shown at that position of the sorted table.

use tariff_core::view::{self, TariffTable};
use tariff_core::TariffRecord;
use tariff_db::{Database, PartitionName, StoreResult, TariffRepository};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::state::PartitionMode;

/// Working state of one desk session.
#[derive(Debug)]
pub struct Session {
    db: Database,
    mode: PartitionMode,
    active: PartitionName,
    view: Vec<TariffRecord>,
}

impl Session {
    /// Opens a session on `partition`, creating its table if needed, and
    /// loads the partition into the view.
    pub async fn open(
        db: Database,
        partition: PartitionName,
        mode: PartitionMode,
    ) -> StoreResult<Self> {
        let mut session = Session {
            db,
            mode,
            active: partition,
            view: Vec::new(),
        };

        session.repo().ensure_table().await?;
        session.refresh().await?;

        info!(partition = %session.active, mode = ?mode, "Session opened");
        Ok(session)
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn mode(&self) -> PartitionMode {
        self.mode
    }

    pub fn active_partition(&self) -> &PartitionName {
        &self.active
    }

    /// Repository for the active partition.
    pub fn repo(&self) -> TariffRepository {
        self.db.tariffs(self.active.clone())
    }

    /// Makes `partition` the active one, creating its table if absent.
    ///
    /// The view is left alone; callers refresh when they want to show the
    /// new partition.
    pub async fn switch_partition(&mut self, partition: PartitionName) -> StoreResult<()> {
        if partition == self.active {
            return Ok(());
        }

        self.db.tariffs(partition.clone()).ensure_table().await?;
        info!(from = %self.active, to = %partition, "Switched partition");
        self.active = partition;
        Ok(())
    }

    /// Reloads the active partition in storage order and shows it.
    pub async fn refresh(&mut self) -> StoreResult<TariffTable> {
        let records = self.repo().select_all().await?;
        Ok(self.show(records))
    }

    /// Replaces the view with `records` and renders it.
    pub fn show(&mut self, records: Vec<TariffRecord>) -> TariffTable {
        let table = view::render(&records);
        self.view = records;
        table
    }

    /// Rows of the last rendered view.
    pub fn view(&self) -> &[TariffRecord] {
        &self.view
    }

    /// Resolves 1-based row numbers of the current view to directions.
    ///
    /// Every row number is checked before anything is returned, so a bad
    /// selection removes nothing. Rows are visited bottom to top and each
    /// direction appears once.
    pub fn selected_directions(&self, rows: &[usize]) -> ApiResult<Vec<String>> {
        if rows.is_empty() {
            return Err(ApiError::new(
                ErrorCode::NoSelection,
                "Please select a row to remove.",
            ));
        }

        if let Some(bad) = rows.iter().find(|&&row| row == 0 || row > self.view.len()) {
            return Err(ApiError::new(
                ErrorCode::InvalidSelection,
                format!(
                    "Row {} is not in the table (1-{} shown)",
                    bad,
                    self.view.len()
                ),
            ));
        }

        let mut rows = rows.to_vec();
        rows.sort_unstable_by(|a, b| b.cmp(a));
        rows.dedup();

        let mut directions: Vec<String> = Vec::with_capacity(rows.len());
        for row in rows {
            let direction = &self.view[row - 1].direction;
            if !directions.contains(direction) {
                directions.push(direction.clone());
            }
        }

        debug!(?directions, "Resolved selection");
        Ok(directions)
    }
}
