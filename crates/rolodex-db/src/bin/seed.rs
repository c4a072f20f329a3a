//! # Seed Data Generator
//!
//! Populates the database with sample customers for development.
//!
//! ## Usage
//! ```bash
//! # Generate 25 customers (default)
//! cargo run -p rolodex-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p rolodex-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p rolodex-db --bin seed -- --db ./customers.db
//! ```
//!
//! Each customer gets a deterministic name, phone and email and between
//! zero and two addresses, so the search and address filters of the list
//! endpoint have something to match.

use std::env;

use rolodex_core::CustomerFields;
use rolodex_db::{Database, DbConfig, DEFAULT_DATABASE_PATH};

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Grace", "Edsger", "Barbara", "Donald", "Frances", "Ken", "Margaret", "Dennis",
    "Radia", "John", "Sophie", "Niklaus", "Hedy",
];

const LAST_NAMES: &[&str] = &[
    "Lovelace", "Turing", "Hopper", "Dijkstra", "Liskov", "Knuth", "Allen", "Thompson",
    "Hamilton", "Ritchie", "Perlman", "Backus", "Wilson", "Wirth", "Lamarr",
];

const STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Elm St", "Park Rd", "Maple Dr", "Cedar Ln", "Pine Ct", "Lake Blvd",
];

const CITIES: &[&str] = &["Springfield", "Riverside", "Fairview", "Greenville", "Madison"];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 25;
    let mut db_path = String::from(DEFAULT_DATABASE_PATH);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(25);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Rolodex Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of customers to generate (default: 25)");
                println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DATABASE_PATH})");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Rolodex Seed Data Generator");
    println!("===========================");
    println!("Database:  {}", db_path);
    println!("Customers: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    println!("✓ Connected to database");
    println!("✓ Schema ready");

    // Refuse to seed on top of existing data
    let existing = db.customers().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} customers", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let start = std::time::Instant::now();
    let summary = seed_customers(&db, count).await;

    println!();
    println!(
        "✓ Generated {} customers with {} addresses in {:?}",
        summary.customers,
        summary.addresses,
        start.elapsed()
    );
    if summary.failed > 0 {
        println!("⚠ {} customers could not be inserted", summary.failed);
    }

    db.close().await;
    Ok(())
}

/// Rows actually written by a seed run.
#[derive(Debug, Default, PartialEq, Eq)]
struct SeedSummary {
    customers: usize,
    addresses: usize,
    failed: usize,
}

/// Inserts `count` generated customers, skipping any that fail.
async fn seed_customers(db: &Database, count: usize) -> SeedSummary {
    let mut summary = SeedSummary::default();

    for seed in 0..count {
        let (fields, addresses) = generate_customer(seed);

        if let Err(e) = db.customers().create(&fields, &addresses).await {
            eprintln!(
                "Failed to insert {} {}: {}",
                fields.first_name, fields.last_name, e
            );
            summary.failed += 1;
            continue;
        }

        summary.customers += 1;
        summary.addresses += addresses.len();
    }

    summary
}

/// Generates one customer and its addresses from a sequence number.
fn generate_customer(seed: usize) -> (CustomerFields, Vec<String>) {
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = LAST_NAMES[(seed * 7) % LAST_NAMES.len()];

    let fields = CustomerFields::new(
        first,
        last,
        format!("555-{:04}", seed % 10_000),
        format!(
            "{}.{}{}@example.com",
            first.to_lowercase(),
            last.to_lowercase(),
            seed
        ),
    );

    // 0, 1 or 2 addresses
    let addresses = (0..seed % 3)
        .map(|n| {
            let number = 1 + (seed * 13 + n * 31) % 999;
            let street = STREETS[(seed + n) % STREETS.len()];
            let city = CITIES[(seed / 3 + n) % CITIES.len()];
            format!("{number} {street}, {city}")
        })
        .collect();

    (fields, addresses)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_counts_written_rows() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let summary = seed_customers(&db, 9).await;

        // seeds 0..9 carry 0, 1, 2, 0, 1, 2, ... addresses
        assert_eq!(
            summary,
            SeedSummary {
                customers: 9,
                addresses: 9,
                failed: 0
            }
        );
        assert_eq!(db.customers().count().await.unwrap(), 9);
    }

    #[tokio::test]
    async fn test_seed_reports_only_successful_inserts() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sqlx::query(
            r#"
            CREATE TRIGGER reject_addresses BEFORE INSERT ON addresses
            BEGIN
                SELECT RAISE(ABORT, 'address rejected');
            END
            "#,
        )
        .execute(db.pool())
        .await
        .unwrap();

        let summary = seed_customers(&db, 9).await;

        // only the customers without addresses (seeds 0, 3, 6) survive
        assert_eq!(
            summary,
            SeedSummary {
                customers: 3,
                addresses: 0,
                failed: 6
            }
        );
        assert_eq!(db.customers().count().await.unwrap(), 3);
    }
}
