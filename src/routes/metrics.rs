// SPDX-License-Identifier: MIT

//! Body metric routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::models::Metric;
use crate::routes::input::{require_number, require_text};
use crate::routes::Confirmation;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/metrics", post(store_metric))
        .route("/metrics/{email}", get(list_metrics))
}

#[derive(Deserialize)]
pub struct StoreMetricRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    weight: Option<f64>,
    #[serde(default)]
    bmi: Option<f64>,
    #[serde(default)]
    fat: Option<f64>,
}

/// Store a body-measurement snapshot.
///
/// Numbers are stored as given, no text coercion. Fat defaults to 0.
async fn store_metric(
    State(state): State<Arc<AppState>>,
    Json(req): Json<StoreMetricRequest>,
) -> Result<Json<Confirmation>> {
    let metric = Metric {
        email: require_text(req.email.as_deref(), "email")?,
        date: require_text(req.date.as_deref(), "date")?,
        weight: require_number(req.weight, "weight")?,
        bmi: require_number(req.bmi, "bmi")?,
        fat: req.fat.unwrap_or(0.0),
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    state.store.insert_metric(&metric).await?;

    tracing::info!(email = %metric.email, date = %metric.date, "Metric stored");

    Ok(Json(Confirmation::new("Metric stored")))
}

/// List all metrics owned by an email. Empty array if none.
async fn list_metrics(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Metric>>> {
    let metrics = state.store.metrics_for(&email).await?;
    Ok(Json(metrics))
}
