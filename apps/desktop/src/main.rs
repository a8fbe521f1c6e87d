//! # Tariff Desk Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tariff Desk                                    │
//! │                                                                         │
//! │  tariff-desk [--db PATH] [--partition NAME] [--partition-mode MODE]     │
//! │              [add | remove | sort | list | save | load |                │
//! │               partitions | use | shell]                                 │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  lib.rs ─────► logging, configuration, database, session               │
//! │  commands/ ──► one handler per action                                  │
//! │  console.rs ─► prompts and the interactive shell                       │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  SQLite database: one table per partition (WAL mode)                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    tariff_desktop_lib::run()
}
