//! # State Module
//!
//! Application state for the tariff desk.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────────────────┐   │
//! │  │    ConfigState       │        │            Session               │   │
//! │  │                      │ opens  │                                  │   │
//! │  │  database path       │──────► │  Database (SQLite pool)          │   │
//! │  │  default partition   │        │  partition mode                  │   │
//! │  │  partition mode      │        │  active partition                │   │
//! │  │  log filter          │        │  last rendered view              │   │
//! │  └──────────────────────┘        └──────────────────────────────────┘   │
//! │                                                                         │
//! │  ConfigState: read-only after startup                                  │
//! │  Session: owned by the dispatch loop, passed as &mut to handlers       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{ConfigState, PartitionMode};
pub use session::Session;
