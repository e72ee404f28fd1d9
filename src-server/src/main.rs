use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use wealthtrack_server::main_lib::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("wealthtrack_server=info,tower_http=info")),
        )
        .init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8723".to_string());
    let addr = format!("{host}:{port}");

    let state = Arc::new(AppState::new());

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {addr}");

    axum::serve(listener, app(state))
        .await
        .context("server error")?;

    Ok(())
}
