//! The `serve` subcommand: wire up state, bind, and run until interrupted.

use std::sync::Arc;

use anyhow::{Context, Result};

use microblog_auth::AuthGate;
use microblog_db::Database;

use crate::api;
use crate::config::AppConfig;

pub async fn run(config: AppConfig, bind: Option<String>) -> Result<()> {
    let db = Arc::new(Database::new(&config.database));
    let gate = Arc::new(AuthGate::new(&config.username, &config.password));

    let router = api::create_router(db, gate, &config.secret_key);

    let addr = bind.unwrap_or_else(|| config.bind.clone());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind server to {}", addr))?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    eprintln!("\nShutting down...");
}
