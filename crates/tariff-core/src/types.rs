//! # Domain Types
//!
//! Core domain types used throughout Tariff Desk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  user types ──► TariffInput ──(final price)──► TariffEntry ──► store   │
//! │                 direction                      direction               │
//! │                 price                          price                   │
//! │                 discount                       discount                │
//! │                                                final_price             │
//! │                                                     │                   │
//! │                                       store assigns id                  │
//! │                                                     ▼                   │
//! │                                               TariffRecord              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `TariffEntry` is also the shape of one element in an export file.

use serde::{Deserialize, Serialize};

use crate::pricing::compute_final_price;

// =============================================================================
// Tariff Input
// =============================================================================

/// The three validated values a user typed for a new tariff.
///
/// Only [`crate::validation::validate_entry`] builds these from user text.
#[derive(Debug, Clone, PartialEq)]
pub struct TariffInput {
    /// Letters only, trimmed.
    pub direction: String,
    /// Within `0..=100000`.
    pub price: f64,
    /// Percentage within `0..=100`.
    pub discount: f64,
}

impl TariffInput {
    /// Final price at this moment.
    pub fn final_price(&self) -> f64 {
        compute_final_price(self.price, self.discount)
    }

    /// Freezes the final price and produces the row to insert.
    pub fn into_entry(self) -> TariffEntry {
        let final_price = self.final_price();
        TariffEntry {
            direction: self.direction,
            price: self.price,
            discount: self.discount,
            final_price,
        }
    }
}

// =============================================================================
// Tariff Entry
// =============================================================================

/// A tariff without its store identity.
///
/// ## Where It Is Used
/// - Insert payload for the store
/// - Element of an export/import document (`deny_unknown_fields`: a document
///   element must carry exactly these four keys)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TariffEntry {
    pub direction: String,
    pub price: f64,
    pub discount: f64,
    pub final_price: f64,
}

// =============================================================================
// Tariff Record
// =============================================================================

/// One row of a partition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TariffRecord {
    /// Assigned by the store on insert, never changes.
    pub id: i64,

    /// Route/destination label.
    pub direction: String,

    /// Base price.
    pub price: f64,

    /// Discount percentage.
    pub discount: f64,

    /// `price` net of `discount`, frozen at creation time.
    pub final_price: f64,
}

impl TariffRecord {
    /// Drops the store identity, keeping every value verbatim.
    pub fn to_entry(&self) -> TariffEntry {
        TariffEntry {
            direction: self.direction.clone(),
            price: self.price,
            discount: self.discount,
            final_price: self.final_price,
        }
    }
}

impl From<TariffRecord> for TariffEntry {
    fn from(record: TariffRecord) -> Self {
        TariffEntry {
            direction: record.direction,
            price: record.price,
            discount: record.discount,
            final_price: record.final_price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
