// SPDX-License-Identifier: MIT

//! Workout logging and listing routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::Result;
use crate::models::Workout;
use crate::routes::input::{require_amount, require_text, NumberOrText};
use crate::routes::Confirmation;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/log-workout", post(log_workout))
        .route("/workouts/{email}", get(list_workouts))
}

#[derive(Deserialize)]
pub struct LogWorkoutRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(rename = "type", default)]
    workout_type: Option<String>,
    #[serde(default)]
    duration: Option<NumberOrText>,
    #[serde(default)]
    calories: Option<NumberOrText>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

/// Log a workout for an account.
///
/// Duration and calories accept number or text input and are stored as
/// integers. The date string is stored as supplied.
async fn log_workout(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LogWorkoutRequest>,
) -> Result<Json<Confirmation>> {
    let workout = Workout {
        email: require_text(req.email.as_deref(), "email")?,
        workout_type: require_text(req.workout_type.as_deref(), "type")?,
        duration: require_amount(req.duration.as_ref(), "duration")?,
        calories: require_amount(req.calories.as_ref(), "calories")?,
        date: require_text(req.date.as_deref(), "date")?,
        notes: req.notes.filter(|n| !n.trim().is_empty()),
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    state.store.insert_workout(&workout).await?;

    tracing::info!(
        email = %workout.email,
        workout_type = %workout.workout_type,
        duration = workout.duration,
        "Workout logged"
    );

    Ok(Json(Confirmation::new("Workout logged")))
}

/// List all workouts owned by an email. Empty array if none.
async fn list_workouts(
    State(state): State<Arc<AppState>>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Workout>>> {
    let workouts = state.store.workouts_for(&email).await?;
    Ok(Json(workouts))
}
