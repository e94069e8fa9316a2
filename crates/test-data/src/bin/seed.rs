//! Default seed script - uploads a synthetic training history
//!
//! Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```
//!
//! `RUNLOG_URL`, `SEED_WEEKS` and `SEED` override the defaults.

use rand::{SeedableRng, rngs::StdRng};
use test_data::{api::ApiSeeder, config::SeedConfig, generators::RunGenerator};
use time::OffsetDateTime;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();
    let seeder = ApiSeeder::new(&config.base_url);
    seeder.check_health().await?;

    tracing::info!("Connected to {}", config.base_url);

    if config.clear_existing {
        let removed = seeder.clear().await?;
        tracing::info!("Removed {removed} existing runs");
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let today = OffsetDateTime::now_utc().date();
    let (min, max) = config.runs_per_week;
    let runs = RunGenerator::default()
        .with_runs_per_week(min, max)
        .generate(config.weeks, today, &mut rng);

    let ids = seeder.seed(&runs).await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Weeks: {}", config.weeks);
    tracing::info!("  Runs: {}/{}", ids.len(), runs.len());

    Ok(())
}
