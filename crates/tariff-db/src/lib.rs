//! # tariff-db: Database Layer for Tariff Desk
//!
//! This crate provides database access for Tariff Desk.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Tariff Desk Data Flow                             │
//! │                                                                         │
//! │  Action handler (add / remove / sort / list / save / load)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tariff-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌─────────────────┐  ┌──────────────┐   │   │
//! │  │   │   Database    │    │  Repositories   │  │  Partitions  │   │   │
//! │  │   │   (pool.rs)   │    │  (tariff.rs)    │  │ (partition)  │   │   │
//! │  │   │               │    │                 │  │              │   │   │
//! │  │   │ SqlitePool    │◄───│ TariffRepository│  │ PartitionName│   │   │
//! │  │   │ Connection    │    │ one per table   │  │ table_paris  │   │   │
//! │  │   └───────────────┘    └─────────────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ~/.local/share/tariff-desk/tariffs.db                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`partition`] - Validated partition (table) names
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tariff_db::{Database, DbConfig, PartitionName};
//!
//! let db = Database::new(DbConfig::new("tariffs.db")).await?;
//!
//! let tariffs = db.tariffs(PartitionName::default_partition());
//! let rows = tariffs.select_sorted_by_final_price().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod partition;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use partition::PartitionName;
pub use pool::{Database, DbConfig};

pub use repository::tariff::TariffRepository;
