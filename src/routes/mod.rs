// SPDX-License-Identifier: MIT

//! HTTP route handlers.

pub mod accounts;
pub mod input;
pub mod metrics;
pub mod plans;
pub mod workouts;

use crate::AppState;
use axum::response::Redirect;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Generic confirmation body for write operations.
#[derive(Serialize)]
pub struct Confirmation {
    pub success: bool,
    pub msg: String,
}

impl Confirmation {
    pub fn new(msg: &str) -> Self {
        Self {
            success: true,
            msg: msg.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Build the complete router with all routes.
///
/// API handlers live under `/api/auth`; the root path redirects to the index
/// document and every unrecognized path falls through to static-file
/// resolution.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .merge(accounts::routes())
        .merge(workouts::routes())
        .merge(metrics::routes())
        .merge(plans::routes());

    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(|| async { Redirect::permanent("/index.html") }))
        .nest("/api/auth", api)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
        .layer(middleware::from_fn(
            crate::middleware::logging::log_requests,
        ))
        .with_state(state)
}
