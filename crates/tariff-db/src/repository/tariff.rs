//! # Tariff Repository
//!
//! Database operations for the tariffs of one partition.
//!
//! ## Partition Table
//! ```sql
//! CREATE TABLE IF NOT EXISTS "<partition>" (
//!     id          INTEGER PRIMARY KEY AUTOINCREMENT,
//!     direction   TEXT NOT NULL,
//!     price       REAL NOT NULL,
//!     discount    REAL NOT NULL,
//!     final_price REAL NOT NULL
//! )
//! ```
//!
//! The table name is spliced into the SQL text, which is why repositories are
//! only built from a validated [`PartitionName`]. Values are always bound.
//!
//! ## Ordering
//! ```text
//! select_all                     ORDER BY id               (insertion order)
//! select_sorted_by_final_price   ORDER BY final_price, id  (stable for ties)
//! ```

use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::partition::PartitionName;
use tariff_core::{TariffEntry, TariffRecord};

/// Repository for tariff database operations, bound to one partition.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.tariffs(PartitionName::default_partition());
/// repo.ensure_table().await?;
///
/// let record = repo.insert(&entry).await?;
/// let sorted = repo.select_sorted_by_final_price().await?;
/// ```
#[derive(Debug, Clone)]
pub struct TariffRepository {
    pool: SqlitePool,
    partition: PartitionName,
}

impl TariffRepository {
    /// Creates a new TariffRepository.
    pub fn new(pool: SqlitePool, partition: PartitionName) -> Self {
        TariffRepository { pool, partition }
    }

    /// The partition this repository reads and writes.
    pub fn partition(&self) -> &PartitionName {
        &self.partition
    }

    /// Creates the partition table if it does not exist yet.
    ///
    /// Idempotent: repeat calls are no-ops.
    pub async fn ensure_table(&self) -> StoreResult<()> {
        debug!(partition = %self.partition, "Ensuring partition table");

        let sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                direction TEXT NOT NULL,
                price REAL NOT NULL,
                discount REAL NOT NULL,
                final_price REAL NOT NULL
            )
            "#,
            self.partition.quoted()
        );

        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }

    /// Inserts one tariff; the store assigns the id.
    ///
    /// ## Returns
    /// * `Ok(TariffRecord)` - The stored row, including its new id
    /// * `Err(StoreError)` - I/O or constraint failure
    pub async fn insert(&self, entry: &TariffEntry) -> StoreResult<TariffRecord> {
        debug!(
            partition = %self.partition,
            direction = %entry.direction,
            "Inserting tariff"
        );

        let result = sqlx::query(&self.insert_sql())
            .bind(&entry.direction)
            .bind(entry.price)
            .bind(entry.discount)
            .bind(entry.final_price)
            .execute(&self.pool)
            .await?;

        Ok(TariffRecord {
            id: result.last_insert_rowid(),
            direction: entry.direction.clone(),
            price: entry.price,
            discount: entry.discount,
            final_price: entry.final_price,
        })
    }

    /// Deletes every tariff whose direction equals `direction` exactly
    /// (case-sensitive).
    ///
    /// ## Returns
    /// Number of rows removed; zero when nothing matched.
    pub async fn delete_by_direction(&self, direction: &str) -> StoreResult<u64> {
        debug!(partition = %self.partition, direction = %direction, "Deleting tariffs");

        let sql = format!(
            "DELETE FROM {} WHERE direction = ?1",
            self.partition.quoted()
        );

        let result = sqlx::query(&sql)
            .bind(direction)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// All tariffs in insertion order.
    pub async fn select_all(&self) -> StoreResult<Vec<TariffRecord>> {
        self.select_ordered("id").await
    }

    /// All tariffs, cheapest final price first; equal prices keep insertion
    /// order.
    pub async fn select_sorted_by_final_price(&self) -> StoreResult<Vec<TariffRecord>> {
        self.select_ordered("final_price, id").await
    }

    async fn select_ordered(&self, order_by: &str) -> StoreResult<Vec<TariffRecord>> {
        let sql = format!(
            "SELECT id, direction, price, discount, final_price FROM {} ORDER BY {}",
            self.partition.quoted(),
            order_by
        );

        let records = sqlx::query_as::<_, TariffRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(partition = %self.partition, count = records.len(), "Selected tariffs");
        Ok(records)
    }

    /// Replaces the partition's contents with `entries`, stored verbatim.
    ///
    /// ## Transaction
    /// ```text
    /// BEGIN
    ///   DELETE FROM "<partition>"
    ///   INSERT ... (once per entry, final_price as given)
    /// COMMIT
    /// ```
    /// A failure before COMMIT rolls the partition back to its old contents.
    ///
    /// ## Returns
    /// Number of rows inserted.
    pub async fn replace_all(&self, entries: &[TariffEntry]) -> StoreResult<u64> {
        info!(
            partition = %self.partition,
            count = entries.len(),
            "Replacing partition contents"
        );

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::TransactionFailed(e.to_string()))?;

        let delete_sql = format!("DELETE FROM {}", self.partition.quoted());
        let removed = sqlx::query(&delete_sql).execute(&mut *tx).await?;
        debug!(removed = removed.rows_affected(), "Cleared partition");

        let insert_sql = self.insert_sql();
        let mut inserted = 0;
        for entry in entries {
            sqlx::query(&insert_sql)
                .bind(&entry.direction)
                .bind(entry.price)
                .bind(entry.discount)
                .bind(entry.final_price)
                .execute(&mut *tx)
                .await?;
            inserted += 1;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::TransactionFailed(e.to_string()))?;

        Ok(inserted)
    }

    /// Counts the tariffs in the partition.
    pub async fn count(&self) -> StoreResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.partition.quoted());
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    fn insert_sql(&self) -> String {
        format!(
            "INSERT INTO {} (direction, price, discount, final_price) VALUES (?1, ?2, ?3, ?4)",
            self.partition.quoted()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn entry(direction: &str, price: f64, discount: f64) -> TariffEntry {
        TariffEntry {
            direction: direction.to_string(),
            price,
            discount,
            final_price: tariff_core::compute_final_price(price, discount),
        }
    }

    async fn repo() -> TariffRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.tariffs(PartitionName::default_partition())
    }

    #[tokio::test]
    async fn test_ensure_table_is_idempotent() {
        let repo = repo().await;
        repo.ensure_table().await.unwrap();
        repo.ensure_table().await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = repo().await;
        let a = repo.insert(&entry("London", 1000.0, 20.0)).await.unwrap();
        let b = repo.insert(&entry("Paris", 500.0, 10.0)).await.unwrap();

        assert!(b.id > a.id);
        assert_eq!(a.final_price, 800.0);

        let all = repo.select_all().await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn test_sorted_by_final_price_is_stable() {
        let repo = repo().await;
        repo.insert(&entry("Rome", 300.0, 0.0)).await.unwrap();
        repo.insert(&entry("Oslo", 100.0, 0.0)).await.unwrap();
        repo.insert(&entry("Bern", 200.0, 50.0)).await.unwrap(); // 100.0, ties with Oslo
        repo.insert(&entry("Kyiv", 50.0, 0.0)).await.unwrap();

        let sorted = repo.select_sorted_by_final_price().await.unwrap();
        let directions: Vec<&str> = sorted.iter().map(|r| r.direction.as_str()).collect();
        assert_eq!(directions, vec!["Kyiv", "Oslo", "Bern", "Rome"]);

        assert!(sorted
            .windows(2)
            .all(|w| w[0].final_price <= w[1].final_price));

        // storage order is untouched by sorting
        let all = repo.select_all().await.unwrap();
        assert_eq!(all[0].direction, "Rome");
    }

    #[tokio::test]
    async fn test_delete_by_direction() {
        let repo = repo().await;
        repo.insert(&entry("Paris", 500.0, 10.0)).await.unwrap();
        repo.insert(&entry("London", 1000.0, 20.0)).await.unwrap();
        repo.insert(&entry("Paris", 700.0, 0.0)).await.unwrap();
        repo.insert(&entry("paris", 1.0, 0.0)).await.unwrap();

        assert_eq!(repo.delete_by_direction("Paris").await.unwrap(), 2);

        let left: Vec<String> = repo
            .select_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.direction)
            .collect();
        assert_eq!(left, vec!["London", "paris"]);

        // repeat is a no-op
        assert_eq!(repo.delete_by_direction("Paris").await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_replace_all_stores_verbatim() {
        let repo = repo().await;
        repo.insert(&entry("Old", 1.0, 0.0)).await.unwrap();

        let incoming = vec![
            TariffEntry {
                direction: "Rome".to_string(),
                price: 10.0,
                discount: 0.0,
                // not what the rule would give; kept as is
                final_price: 3.0,
            },
            entry("Oslo", 20.0, 50.0),
        ];

        assert_eq!(repo.replace_all(&incoming).await.unwrap(), 2);

        let stored: Vec<TariffEntry> = repo
            .select_all()
            .await
            .unwrap()
            .into_iter()
            .map(TariffEntry::from)
            .collect();
        assert_eq!(stored, incoming);
    }

    #[tokio::test]
    async fn test_replace_all_with_nothing_empties_partition() {
        let repo = repo().await;
        repo.insert(&entry("Old", 1.0, 0.0)).await.unwrap();
        assert_eq!(repo.replace_all(&[]).await.unwrap(), 0);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_partitions_are_isolated() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let main = db.tariffs(PartitionName::default_partition());
        let paris = db.tariffs(PartitionName::for_direction("Paris").unwrap());
        paris.ensure_table().await.unwrap();

        main.insert(&entry("London", 1000.0, 20.0)).await.unwrap();
        paris.insert(&entry("Paris", 500.0, 10.0)).await.unwrap();

        assert_eq!(main.count().await.unwrap(), 1);
        assert_eq!(paris.count().await.unwrap(), 1);
        assert_eq!(paris.partition().as_str(), "table_paris");
    }

    #[tokio::test]
    async fn test_missing_table_is_a_store_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let ghost = db.tariffs(PartitionName::new("ghost").unwrap());
        let err = ghost.select_all().await.unwrap_err();
        assert!(matches!(err, StoreError::QueryFailed(_)));
    }
}
