//! # View Module
//!
//! Turns records into display rows.
//!
//! ```text
//! ┌────┬───────────┬─────────┬──────────┬─────────────┐
//! │ #  │ Direction │ Price   │ Discount │ Final Price │
//! ├────┼───────────┼─────────┼──────────┼─────────────┤
//! │ 1  │ London    │ 1000.00 │ 20.00    │ 800.00      │
//! └────┴───────────┴─────────┴──────────┴─────────────┘
//! ```
//!
//! Numbers are formatted with exactly two decimals here and only here; the
//! stored values keep full precision. Nothing in this module touches the store,
//! callers pass the records in.

use std::fmt;

use serde::Serialize;

use crate::types::TariffRecord;

/// Column captions, in display order.
pub const HEADERS: [&str; 4] = ["Direction", "Price", "Discount", "Final Price"];

/// One display row: every cell is already a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TariffRow {
    pub direction: String,
    pub price: String,
    pub discount: String,
    pub final_price: String,
}

impl TariffRow {
    fn cells(&self) -> [&str; 4] {
        [
            &self.direction,
            &self.price,
            &self.discount,
            &self.final_price,
        ]
    }
}

impl From<&TariffRecord> for TariffRow {
    fn from(record: &TariffRecord) -> Self {
        TariffRow {
            direction: record.direction.clone(),
            price: format_amount(record.price),
            discount: format_amount(record.discount),
            final_price: format_amount(record.final_price),
        }
    }
}

/// The rendered table, rows in the order the records were given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TariffTable {
    pub rows: Vec<TariffRow>,
}

impl TariffTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Renders records into a table, keeping their order.
pub fn render(records: &[TariffRecord]) -> TariffTable {
    TariffTable {
        rows: records.iter().map(TariffRow::from).collect(),
    }
}

/// Two decimals, no thousands separator.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Aligned plain-text grid with a 1-based row number column.
impl fmt::Display for TariffTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number_width = self.rows.len().to_string().len().max(1);

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write!(f, "{:>number_width$}", "#")?;
        for (n, (header, width)) in HEADERS.iter().zip(widths).enumerate() {
            if n == 0 {
                write!(f, "  {header:<width$}")?;
            } else {
                write!(f, "  {header:>width$}")?;
            }
        }
        writeln!(f)?;

        write!(f, "{}", "-".repeat(number_width))?;
        for width in widths {
            write!(f, "  {}", "-".repeat(width))?;
        }

        for (i, row) in self.rows.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:>number_width$}", i + 1)?;
            for (n, (cell, width)) in row.cells().iter().zip(widths).enumerate() {
                // text left, numbers right
                if n == 0 {
                    write!(f, "  {cell:<width$}")?;
                } else {
                    write!(f, "  {cell:>width$}")?;
                }
            }
        }

        if self.rows.is_empty() {
            writeln!(f)?;
            write!(f, "(no tariffs)")?;
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
