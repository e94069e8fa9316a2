use std::env;

use runlog::{fixtures::demo_runs_ending, run_server, store::MemoryStore};
use time::OffsetDateTime;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let store = if env_flag("RUNLOG_DEMO_DATA") {
        let runs = demo_runs_ending(OffsetDateTime::now_utc());
        tracing::info!("Preloading {} demo runs", runs.len());
        MemoryStore::with_runs(runs)
    } else {
        MemoryStore::new()
    };

    let port = env::var("PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or(3001);

    run_server(store.shared(), port).await
}
