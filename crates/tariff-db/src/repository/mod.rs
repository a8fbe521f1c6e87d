//! # Repository Module
//!
//! Database repository implementations for Tariff Desk.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Action handler                                                        │
//! │       │                                                                 │
//! │       │  db.tariffs(partition).select_sorted_by_final_price()          │
//! │       ▼                                                                 │
//! │  TariffRepository (bound to one partition)                             │
//! │  ├── ensure_table()                                                    │
//! │  ├── insert(entry)                                                     │
//! │  ├── delete_by_direction(direction)                                    │
//! │  ├── select_all() / select_sorted_by_final_price()                     │
//! │  └── replace_all(entries)                                              │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`tariff::TariffRepository`] - Tariff CRUD within a partition

pub mod tariff;
