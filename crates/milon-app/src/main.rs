use std::sync::Arc;

use clap::Parser;
use milon_config::Config;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::controller::AppController;
use crate::state::AppState;

mod cli;
mod controller;
mod events;
mod io;
mod state;
mod ui;


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::new();

    if let Some(word) = args.word {
        return cli::run_once(&config, &word).await;
    }

    if !atty::is(atty::Stream::Stdout) {
        anyhow::bail!("interactive mode needs a terminal; pass a word to search instead");
    }

    let state = Arc::new(AppState::new(config));
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown requested");
        }
        result = tasks.join_next() => {
            match result {
                Some(Ok(Ok(()))) => tracing::info!("task finished"),
                Some(Ok(Err(err))) => tracing::error!("task failed: {err}"),
                Some(Err(err)) => tracing::error!("task panicked: {err}"),
                None => {}
            }
        }
    }

    controller.shutdown();
    while tasks.join_next().await.is_some() {}
    Ok(())
}
