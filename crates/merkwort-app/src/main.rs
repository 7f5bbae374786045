use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use merkwort_store::MemoryStore;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod config;
pub mod controller;
pub mod seed;

use self::config::Config;
use self::controller::AppController;

#[derive(Parser)]
#[command(name = "merkwort", about = "Reactive German vocabulary word list")]
struct Cli {
    /// JSON seed file with nouns, verbs and adjectives
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let store = Arc::new(MemoryStore::new());
    let words = match &cli.seed {
        Some(path) => seed::load(path)?,
        None => seed::sample(),
    };
    seed::apply(&store, words).await?;

    let controller = AppController::new(store, &config);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(e))) => tracing::error!("task exited: {e}"),
                Some(Err(e)) => tracing::error!("task panicked: {e}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    while tasks.join_next().await.is_some() {}

    Ok(())
}
