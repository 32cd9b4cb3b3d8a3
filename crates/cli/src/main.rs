//! Terminal client entry point.
mod app;
mod config;
mod controller;
mod download;
mod message;
mod presentation;
mod state;

use anyhow::Result;
use app::App;
use config::LogbookConfig;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = LogbookConfig::from_env();
    tracing::info!(data_dir = %config.data_dir.display(), "logbook starting");

    let app = App::new(&config)?;

    let mut terminal = presentation::terminal::init()?;
    let _guard = presentation::terminal::TerminalGuard;

    let result = app.run(&mut terminal).await;

    presentation::terminal::restore()?;
    tracing::info!("logbook exiting");

    result
}
