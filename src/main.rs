// SPDX-License-Identifier: MIT

//! Fitlog API Server
//!
//! Fitness-tracking backend: accounts for clients and trainers, workout and
//! body-metric logging, and trainer-assigned plans, persisted in a MongoDB
//! document store.

use fitlog::{config::Config, db::Store, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(
        port = config.port,
        env = %config.app_env,
        "Starting Fitlog API"
    );

    // Create the store handle. The driver connects lazily; a background task
    // probes the store and retries until it answers, so startup never blocks
    // on the database.
    let store = Store::connect(&config.mongo_uri)
        .await
        .expect("Invalid store connection string");
    tokio::spawn(store.clone().wait_until_ready(config.mongo_uri.clone()));

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        store,
    });

    // Build router
    let app = fitlog::routes::create_router(state);

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("fitlog=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
