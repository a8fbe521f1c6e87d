//! # tariff-core: Pure Business Logic for Tariff Desk
//!
//! This crate holds every rule of the tariff book as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Tariff Desk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal front end (tariff-desk)                │   │
//! │  │     add ── remove ── sort ── list ── save ── load               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ tariff-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  pricing  │  │ transfer  │  │   view    │  │   │
//! │  │   │  Record   │  │ final     │  │ JSON      │  │ 2-decimal │  │   │
//! │  │   │  Entry    │  │ price     │  │ export    │  │ table     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                  ┌───────────┐                                  │   │
//! │  │                  │validation │                                  │   │
//! │  │                  └───────────┘                                  │   │
//! │  │   NO I/O • NO DATABASE • NO FILES • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  tariff-db (Database Layer)                     │   │
//! │  │                SQLite partitions, repositories                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (TariffRecord, TariffEntry, TariffInput)
//! - [`pricing`] - Final price derivation
//! - [`validation`] - Entry validation of the three user-typed fields
//! - [`transfer`] - JSON export/import of partition contents
//! - [`view`] - Tabular rendering with two-decimal numbers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tariff_core::validation::validate_entry;
//!
//! let input = validate_entry("Paris", "500", "10").unwrap();
//! assert_eq!(input.final_price(), 450.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pricing;
pub mod transfer;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, FormatError, ValidationError};
pub use pricing::compute_final_price;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Partition used when nothing else is configured.
pub const DEFAULT_PARTITION: &str = "tariffs";

/// Prefix of partitions derived from a direction in per-direction mode.
///
/// `"Paris"` lands in `table_paris`.
pub const DIRECTION_PARTITION_PREFIX: &str = "table_";

/// Largest price accepted at entry time (inclusive).
pub const MAX_PRICE: f64 = 100_000.0;

/// Largest discount percentage accepted at entry time (inclusive).
pub const MAX_DISCOUNT_PERCENT: f64 = 100.0;
