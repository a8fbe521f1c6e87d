//! # Seed Data Generator
//!
//! Populates a partition with sample tariffs for development.
//!
//! ## Usage
//! ```bash
//! # Generate 200 tariffs (default) into ./tariffs_dev.db, partition "tariffs"
//! cargo run -p tariff-db --bin seed
//!
//! # Custom amount, file and partition
//! cargo run -p tariff-db --bin seed -- --count 1000 --db ./data/tariffs.db --partition archive
//! ```
//!
//! Prices and discounts are derived from the row index, so two runs with the
//! same arguments produce the same rows.

use std::env;
use tariff_core::TariffInput;
use tariff_db::{Database, DbConfig, PartitionName};

/// Destinations used for directions (letters only).
const DIRECTIONS: &[&str] = &[
    "Amsterdam",
    "Athens",
    "Barcelona",
    "Berlin",
    "Bern",
    "Brussels",
    "Budapest",
    "Copenhagen",
    "Dublin",
    "Helsinki",
    "Lisbon",
    "London",
    "Madrid",
    "Milan",
    "Oslo",
    "Paris",
    "Prague",
    "Riga",
    "Rome",
    "Sofia",
    "Stockholm",
    "Tallinn",
    "Vienna",
    "Vilnius",
    "Warsaw",
    "Zagreb",
];

/// Discount steps in percent
const DISCOUNTS: &[f64] = &[0.0, 5.0, 10.0, 12.5, 15.0, 20.0, 25.0, 50.0];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 200;
    let mut db_path = String::from("./tariffs_dev.db");
    let mut partition = PartitionName::default_partition();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--partition" | "-p" => {
                if i + 1 < args.len() {
                    partition = args[i + 1].parse()?;
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Tariff Desk Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>          Number of tariffs to generate (default: 200)");
                println!("  -d, --db <PATH>          Database file path (default: ./tariffs_dev.db)");
                println!("  -p, --partition <NAME>   Target partition (default: tariffs)");
                println!("  -h, --help               Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Tariff Desk Seed Data Generator");
    println!("===============================");
    println!("Database:  {}", db_path);
    println!("Partition: {}", partition);
    println!("Tariffs:   {}", count);
    println!();

    let config = DbConfig::new(&db_path).default_partition(partition.clone());
    let db = Database::new(config).await?;
    let repo = db.tariffs(partition);

    println!("✓ Connected to database");

    let existing = repo.count().await?;
    if existing > 0 {
        println!("⚠ Partition already has {} tariffs", existing);
        println!("  Skipping seed to avoid duplicates.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0;

    for seed in 0..count {
        let input = generate_tariff(seed);
        if let Err(e) = repo.insert(&input.clone().into_entry()).await {
            eprintln!("Failed to insert {}: {}", input.direction, e);
            continue;
        }

        generated += 1;
        if generated % 100 == 0 {
            println!("  Generated {} tariffs...", generated);
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} tariffs in {:?}", generated, elapsed);

    let cheapest = repo.select_sorted_by_final_price().await?;
    if let Some(first) = cheapest.first() {
        println!("  Cheapest: {} at {:.2}", first.direction, first.final_price);
    }

    db.close().await;
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds one tariff from its index.
fn generate_tariff(seed: usize) -> TariffInput {
    let direction = DIRECTIONS[seed % DIRECTIONS.len()].to_string();

    // 49.00 - 2548.50 in steps of 0.50
    let price = 49.0 + ((seed * 37) % 5000) as f64 * 0.5;

    let discount = DISCOUNTS[(seed / DIRECTIONS.len()) % DISCOUNTS.len()];

    TariffInput {
        direction,
        price,
        discount,
    }
}
