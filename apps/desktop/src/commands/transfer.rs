//! # Transfer Commands
//!
//! Save the active partition to a JSON file and load one back.
//!
//! ## Load Sequence
//! ```text
//! read file ──► import_bytes ───► replace_all (one transaction) ──► refresh
//!    │               │                    │
//!    IO_ERROR        FORMAT_ERROR         STORE_ERROR
//!    (store          (store               (rolled back,
//!     untouched)      untouched)           old rows kept)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tariff_core::transfer::{export_records, import_bytes, inconsistent_final_prices};
use tariff_core::view::TariffTable;
use tariff_core::TariffEntry;
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::state::Session;

/// Result of a save action.
#[derive(Debug, Clone, PartialEq)]
pub struct Saved {
    pub path: PathBuf,
    pub count: usize,
}

/// Result of a load action.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub path: PathBuf,
    pub count: u64,
    pub table: TariffTable,
}

/// Writes every tariff of the active partition to `path`, overwriting it.
///
/// Rows are written in storage order with their stored final price.
pub async fn save_to_file(session: &Session, path: &Path) -> ApiResult<Saved> {
    let entries: Vec<TariffEntry> = session
        .repo()
        .select_all()
        .await?
        .into_iter()
        .map(TariffEntry::from)
        .collect();

    let document = export_records(&entries)?;
    fs::write(path, document).map_err(|e| ApiError::io("write", path, e))?;

    info!(
        partition = %session.active_partition(),
        path = %path.display(),
        count = entries.len(),
        "Tariffs saved"
    );

    Ok(Saved {
        path: path.to_path_buf(),
        count: entries.len(),
    })
}

/// Replaces the active partition with the tariffs in `path`.
///
/// ## Behavior
/// - The whole document is parsed before the store is touched
/// - Final prices are stored as given; entries whose final price does not
///   follow from price and discount are logged, not corrected
pub async fn load_from_file(session: &mut Session, path: &Path) -> ApiResult<Loaded> {
    let bytes = fs::read(path).map_err(|e| ApiError::io("read", path, e))?;
    let entries = import_bytes(&bytes)?;

    for index in inconsistent_final_prices(&entries) {
        let entry = &entries[index];
        warn!(
            index,
            direction = %entry.direction,
            price = entry.price,
            discount = entry.discount,
            final_price = entry.final_price,
            "Imported final price does not match price and discount"
        );
    }

    let count = session.repo().replace_all(&entries).await?;

    info!(
        partition = %session.active_partition(),
        path = %path.display(),
        count,
        "Tariffs loaded"
    );

    let table = session.refresh().await?;
    Ok(Loaded {
        path: path.to_path_buf(),
        count,
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::PartitionMode;
    use tariff_core::validation::validate_entry;
    use tariff_db::{Database, DbConfig, PartitionName};
    use tempfile::tempdir;

    async fn session() -> Session {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        Session::open(db, PartitionName::default_partition(), PartitionMode::Single)
            .await
            .unwrap()
    }

    async fn add(session: &Session, direction: &str, price: &str, discount: &str) {
        let entry = validate_entry(direction, price, discount)
            .unwrap()
            .into_entry();
        session.repo().insert(&entry).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_then_load_into_other_partition() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tariffs.json");

        let mut session = session().await;
        add(&session, "London", "1000", "20").await;
        add(&session, "Paris", "500", "10").await;

        let saved = save_to_file(&session, &path).await.unwrap();
        assert_eq!(saved.count, 2);

        session
            .switch_partition(PartitionName::new("restored").unwrap())
            .await
            .unwrap();
        let loaded = load_from_file(&mut session, &path).await.unwrap();
        assert_eq!(loaded.count, 2);
        assert_eq!(loaded.table.rows[0].final_price, "800.00");
        assert_eq!(loaded.table.rows[1].direction, "Paris");
    }

    #[tokio::test]
    async fn test_load_replaces_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("one.json");
        fs::write(
            &path,
            r#"[{"direction": "Rome", "price": 10.0, "discount": 0.0, "final_price": 3.0}]"#,
        )
        .unwrap();

        let mut session = session().await;
        add(&session, "Oslo", "100", "0").await;

        let loaded = load_from_file(&mut session, &path).await.unwrap();
        assert_eq!(loaded.count, 1);
        assert_eq!(session.view()[0].direction, "Rome");
        assert_eq!(session.view()[0].final_price, 3.0);
    }

    #[tokio::test]
    async fn test_malformed_file_leaves_store_untouched() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"[{"direction": "Rome", "price": "ten"}]"#).unwrap();

        let mut session = session().await;
        add(&session, "Oslo", "100", "0").await;

        let err = load_from_file(&mut session, &path).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::FormatError);
        assert_eq!(session.repo().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_non_utf8_file_is_format_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.json");
        fs::write(&path, b"[{\"direction\": \"Z\xfcrich\"}]").unwrap();

        let mut session = session().await;
        add(&session, "Oslo", "100", "0").await;

        let err = load_from_file(&mut session, &path).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::FormatError);
        assert_eq!(session.repo().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let mut session = session().await;

        let err = load_from_file(&mut session, &dir.path().join("absent.json"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::IoError);
        assert!(err.message.contains("absent.json"));
    }

    #[tokio::test]
    async fn test_save_empty_partition() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        let session = session().await;

        save_to_file(&session, &path).await.unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}
