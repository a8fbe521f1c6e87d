//! # Partition Commands
//!
//! Listing the partitions in the database and moving between them.

use std::fmt;

use tariff_core::view::TariffTable;
use tariff_db::PartitionName;

use crate::error::ApiResult;
use crate::state::Session;

/// One line of the partition listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionSummary {
    pub name: PartitionName,
    pub tariffs: i64,
    pub active: bool,
}

impl fmt::Display for PartitionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.active { '*' } else { ' ' };
        write!(f, "{} {} ({} tariffs)", marker, self.name, self.tariffs)
    }
}

/// Lists every partition with its row count, sorted by name.
pub async fn list_partitions(session: &Session) -> ApiResult<Vec<PartitionSummary>> {
    let mut summaries = Vec::new();

    for name in session.db().partitions().await? {
        let tariffs = session.db().tariffs(name.clone()).count().await?;
        summaries.push(PartitionSummary {
            active: &name == session.active_partition(),
            name,
            tariffs,
        });
    }

    Ok(summaries)
}

/// Makes `name` the active partition (created if absent) and shows it.
///
/// ## Errors
/// `VALIDATION_ERROR` when `name` is not a usable table name.
pub async fn use_partition(session: &mut Session, name: &str) -> ApiResult<TariffTable> {
    let partition: PartitionName = name.parse()?;
    session.switch_partition(partition).await?;
    Ok(session.refresh().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::PartitionMode;
    use tariff_db::{Database, DbConfig};

    async fn session() -> Session {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        Session::open(db, PartitionName::default_partition(), PartitionMode::Single)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_use_and_list() {
        let mut session = session().await;
        use_partition(&mut session, "archive").await.unwrap();

        let summaries = list_partitions(&session).await.unwrap();
        let lines: Vec<String> = summaries.iter().map(|s| s.to_string()).collect();
        assert_eq!(lines, vec!["* archive (0 tariffs)", "  tariffs (0 tariffs)"]);
    }

    #[tokio::test]
    async fn test_use_ignores_ascii_case() {
        let mut session = session().await;
        use_partition(&mut session, "TARIFFS").await.unwrap();

        let summaries = list_partitions(&session).await.unwrap();
        assert_eq!(summaries.len(), 1);
        assert!(summaries[0].active);
    }

    #[tokio::test]
    async fn test_use_rejects_bad_name() {
        let mut session = session().await;
        let err = use_partition(&mut session, "drop table").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(session.active_partition().as_str(), "tariffs");
    }
}
