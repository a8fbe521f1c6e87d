//! End-to-end flows through the session and the action dispatcher.

use std::collections::VecDeque;
use std::io;

use tariff_db::{Database, DbConfig, PartitionName};
use tariff_desktop_lib::commands::{dispatch, Action, Outcome};
use tariff_desktop_lib::console::{run_shell, Console};
use tariff_desktop_lib::error::ErrorCode;
use tariff_desktop_lib::state::{PartitionMode, Session};
use tempfile::tempdir;

#[derive(Default)]
struct Scripted {
    input: VecDeque<String>,
    shown: Vec<String>,
    warned: Vec<String>,
}

impl Scripted {
    fn with_lines(lines: &[&str]) -> Self {
        Scripted {
            input: lines.iter().map(|l| l.to_string()).collect(),
            ..Scripted::default()
        }
    }
}

impl Console for Scripted {
    fn ask(&mut self, _label: &str) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn show(&mut self, text: &str) {
        self.shown.push(text.to_string());
    }

    fn warn(&mut self, text: &str) {
        self.warned.push(text.to_string());
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

async fn open(db: &Database, partition: &str, mode: PartitionMode) -> Session {
    Session::open(db.clone(), PartitionName::new(partition).unwrap(), mode)
        .await
        .unwrap()
}

fn add(direction: &str, price: &str, discount: &str) -> Action {
    Action::Add {
        direction: Some(direction.to_string()),
        price: Some(price.to_string()),
        discount: Some(discount.to_string()),
    }
}

#[tokio::test]
async fn add_save_and_load_into_empty_partition() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("export.json");
    let db = Database::new(DbConfig::new(dir.path().join("tariffs.db")))
        .await
        .unwrap();
    let mut console = Scripted::default();

    let mut session = open(&db, "tariffs", PartitionMode::Single).await;
    let outcome = dispatch(&mut session, add("London", "1000", "20"), &mut console)
        .await
        .unwrap();

    let Outcome::Table(table) = outcome else {
        panic!("add should show the table");
    };
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows[0].direction, "London");
    assert_eq!(table.rows[0].final_price, "800.00");

    dispatch(&mut session, Action::Save { file: file.clone() }, &mut console)
        .await
        .unwrap();

    let mut restored = open(&db, "restored", PartitionMode::Single).await;
    let outcome = dispatch(&mut restored, Action::Load { file }, &mut console)
        .await
        .unwrap();

    let Outcome::Loaded(loaded) = outcome else {
        panic!("load should report what it read");
    };
    assert_eq!(loaded.count, 1);
    assert_eq!(restored.view().len(), 1);
    assert_eq!(restored.view()[0].to_entry(), session.view()[0].to_entry());
    assert_eq!(loaded.table.rows[0].final_price, "800.00");

    db.close().await;
}

#[tokio::test]
async fn remove_after_sort_targets_shown_row() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let mut console = Scripted::default();
    let mut session = open(&db, "tariffs", PartitionMode::Single).await;

    for (direction, price) in [("Rome", "300"), ("Oslo", "100"), ("Bern", "200")] {
        dispatch(&mut session, add(direction, price, "0"), &mut console)
            .await
            .unwrap();
    }

    dispatch(&mut session, Action::Sort, &mut console).await.unwrap();
    let outcome = dispatch(&mut session, Action::Remove { rows: vec![2] }, &mut console)
        .await
        .unwrap();

    let Outcome::Removed(removal) = outcome else {
        panic!("remove should report what it deleted");
    };
    assert_eq!(removal.directions, vec!["Bern"]);

    let left: Vec<&str> = session.view().iter().map(|r| r.direction.as_str()).collect();
    assert_eq!(left, vec!["Rome", "Oslo"]);

    let err = dispatch(&mut session, Action::Remove { rows: vec![] }, &mut console)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NoSelection);
}

#[tokio::test]
async fn per_direction_mode_files_each_direction_separately() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let mut console = Scripted::default();
    let mut session = open(&db, "tariffs", PartitionMode::PerDirection).await;

    dispatch(&mut session, add("Paris", "500", "10"), &mut console)
        .await
        .unwrap();
    dispatch(&mut session, add("London", "1000", "20"), &mut console)
        .await
        .unwrap();

    let outcome = dispatch(&mut session, Action::Partitions, &mut console)
        .await
        .unwrap();
    assert_eq!(
        outcome.to_string(),
        "* table_london (1 tariffs)\n  table_paris (1 tariffs)\n  tariffs (0 tariffs)"
    );
}

#[tokio::test]
async fn shell_asks_again_for_invalid_values() {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    let mut session = open(&db, "tariffs", PartitionMode::Single).await;
    let mut console = Scripted::with_lines(&[
        "add",
        "A1b",
        "Paris",
        "500",
        "150",
        "10",
        "remove 7",
        "bogus",
        "quit",
        "list",
    ]);

    run_shell(&mut session, &mut console).await.unwrap();

    assert_eq!(session.view().len(), 1);
    assert_eq!(session.view()[0].final_price, 450.0);

    // the line after quit is never read
    assert_eq!(console.input.len(), 1);

    assert_eq!(console.shown.len(), 1);
    assert!(console.shown[0].contains("450.00"));

    let warnings = console.warned.join("\n");
    assert!(warnings.contains("Invalid input: direction"));
    assert!(warnings.contains("Invalid input: discount"));
    assert!(warnings.contains("Row 7 is not in the table"));
    assert!(warnings.contains("bogus"));
}
