//! # Partition Names
//!
//! A partition is one SQLite table of tariff records. Its name ends up
//! inside SQL text (table names cannot be bound as parameters), so every
//! name goes through [`PartitionName::new`] first.
//!
//! ## Accepted Names
//! - ASCII letters, ASCII digits and `_`
//! - any other non-ASCII character that is not whitespace or a control
//!   character (letters of any script, combining marks)
//! - must not start with a digit
//! - must not use SQLite's reserved `sqlite_` prefix
//!
//! SQLite compares ASCII letters in table names case-insensitively, so ASCII
//! letters are lowercased: `Archive` and `archive` are the same partition.
//! Names are always emitted double-quoted, see [`PartitionName::quoted`].

use std::fmt;
use std::str::FromStr;

use tariff_core::{DEFAULT_PARTITION, DIRECTION_PARTITION_PREFIX};

use crate::error::{StoreError, StoreResult};

/// Validated partition (table) name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartitionName(String);

impl PartitionName {
    /// Validates `name` and lowercases its ASCII letters.
    pub fn new(name: impl Into<String>) -> StoreResult<Self> {
        let name = name.into();

        let Some(first) = name.chars().next() else {
            return Err(StoreError::invalid_partition(name, "must not be empty"));
        };

        if first.is_ascii_digit() {
            return Err(StoreError::invalid_partition(
                name,
                "must not start with a digit",
            ));
        }

        if !name.chars().all(is_name_char) {
            return Err(StoreError::invalid_partition(
                name,
                "must contain only letters, digits and underscores",
            ));
        }

        let name = name.to_ascii_lowercase();
        if name.starts_with("sqlite_") {
            return Err(StoreError::invalid_partition(
                name,
                "the sqlite_ prefix is reserved",
            ));
        }

        Ok(PartitionName(name))
    }

    /// The partition every session starts on unless configured otherwise.
    pub fn default_partition() -> Self {
        PartitionName(DEFAULT_PARTITION.to_string())
    }

    /// Partition derived from a direction: `"Paris"` → `table_paris`.
    ///
    /// Used by the per-direction partition mode only.
    pub fn for_direction(direction: &str) -> StoreResult<Self> {
        PartitionName::new(format!(
            "{DIRECTION_PARTITION_PREFIX}{}",
            direction.to_lowercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier ready to splice into SQL.
    pub fn quoted(&self) -> String {
        format!("\"{}\"", self.0)
    }
}

/// Non-ASCII characters cover every letter and mark that lowercasing a
/// direction can produce (`"İ"` lowercases to `i` + U+0307).
fn is_name_char(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_alphanumeric() || c == '_'
    } else {
        !c.is_whitespace() && !c.is_control()
    }
}

impl Default for PartitionName {
    fn default() -> Self {
        PartitionName::default_partition()
    }
}

impl fmt::Display for PartitionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PartitionName {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartitionName::new(s.trim())
    }
}

impl AsRef<str> for PartitionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
