//! # Seed Data Loader
//!
//! Creates (or migrates) a SQLite dashboard database and loads the sample
//! dataset into it.
//!
//! ## Usage
//! ```bash
//! # Seed ./acme_dev.db
//! cargo run -p acme-db --bin seed
//!
//! # Specify database path and the demo user's password
//! cargo run -p acme-db --bin seed -- --db ./data/dashboard.db --password hunter22
//! ```
//!
//! The demo user gets a fresh v4 id and its password is stored as an
//! Argon2id hash. An existing database with rows in any dashboard table is
//! left untouched.

use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use acme_db::fixture::{Dataset, SAMPLE_USER_PASSWORD};
use acme_db::seed::{hash_password, is_seeded, seed_dataset};
use acme_db::{Database, DbConfig};

/// Acme dashboard seed data loader
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file (created if missing)
    #[arg(short, long, default_value = "./acme_dev.db")]
    db: PathBuf,

    /// Plain-text password for the demo user
    #[arg(short, long, default_value = SAMPLE_USER_PASSWORD)]
    password: String,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,acme=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let args = Args::parse();

    info!(path = %args.db.display(), "Seeding dashboard database");

    let db = Database::new(DbConfig::new(&args.db)).await?;

    let (total, applied) = db.migration_status().await?;
    info!(applied, total, "Schema migrations");

    if is_seeded(&db).await? {
        warn!("Database already has data, skipping seed. Delete the file to regenerate.");
        db.close().await;
        return Ok(());
    }

    let mut dataset = Dataset::sample();
    let password_hash = hash_password(&args.password)?;
    for user in &mut dataset.users {
        user.id = Uuid::new_v4().to_string();
        user.password = password_hash.clone();
    }

    let summary = seed_dataset(&db, &dataset).await?;

    println!("Seeded {}", args.db.display());
    println!("  customers: {}", summary.customers);
    println!("  invoices:  {}", summary.invoices);
    println!("  revenue:   {} months", summary.revenue);
    println!("  users:     {}", summary.users);
    println!("  schema:    {}/{} migrations", applied, total);

    db.close().await;
    Ok(())
}
