//! Loads a delimited catalog export into the `earthquake` table.
//!
//! ```text
//! quake-import --file katalog_gempa.csv
//! ```

use anyhow::Context;
use clap::Parser;
use migration::{Migrator, MigratorTrait};
use quake_catalog_api::{config::Config, import::import_csv_file};
use sea_orm::Database;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quake-import", about = "Bulk-load an earthquake catalog CSV")]
struct Args {
    /// CSV file with columns tgl, ot, lat, lon, depth, mag, remark
    #[arg(short, long)]
    file: PathBuf,

    /// Overrides the connection string built from the DB_* variables
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Apply pending migrations before importing
    #[arg(long)]
    migrate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let db_uri = match args.database_url {
        Some(url) => url,
        None => Config::from_env().context("Invalid configuration")?.db_uri,
    };

    let db = Database::connect(&db_uri)
        .await
        .context("Could not connect to the database")?;
    if args.migrate {
        Migrator::up(&db, None).await.context("Migration failed")?;
    }

    info!(file = %args.file.display(), "Starting import");
    let report = import_csv_file(&db, &args.file).await?;
    info!(
        imported = report.imported,
        skipped = report.skipped.len(),
        "Import complete"
    );
    Ok(())
}
