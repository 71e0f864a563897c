//! Default seed script - replaces all talks and speakers with sample data
//!
//! Run with:
//! ```
//! cargo run -p seed-data --bin seed
//! ```

use conference::Database;
use seed_data::config::{DatabaseConfig, SeedConfig};
use seed_data::db::Seeder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db_config = DatabaseConfig::from_env()?;
    let seed_config = SeedConfig::from_env()?;

    let db = Database::connect(&db_config.url, db_config.max_connections).await?;
    tracing::info!("Connected to database");

    db.migrate().await?;

    let report = Seeder::new(db).run_with_config(&seed_config).await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Talks: {}", report.talks_created);
    tracing::info!("  Speakers: {}", report.speakers_created);

    Ok(())
}
