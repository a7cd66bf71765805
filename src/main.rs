mod ads;
mod app;
mod common;
mod config;
mod db;
mod error;
mod state;
mod users;

use crate::{config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "classifieds=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let state = AppState::init(config).await?;
    db::ensure_schema(&state.db).await?;

    let (host, port) = (state.config.host.clone(), state.config.port);
    let db = state.db.clone();
    app::serve(app::build_app(state), &host, port).await?;

    db.close().await;
    tracing::info!("shut down");
    Ok(())
}
