// SPDX-License-Identifier: MIT

//! Training plan routes.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use mongodb::bson::oid::ObjectId;
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{Plan, PlanResponse};
use crate::routes::input::require_text;
use crate::routes::Confirmation;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    // GET takes a trainer email, PUT/DELETE take a plan id; the path segment
    // is shared so all three live on one route.
    Router::new().route("/plans", post(assign_plan)).route(
        "/plans/{id}",
        get(list_trainer_plans)
            .put(update_plan)
            .delete(delete_plan),
    )
}

#[derive(Deserialize)]
pub struct AssignPlanRequest {
    #[serde(default)]
    trainer: Option<String>,
    #[serde(default)]
    client: Option<String>,
    #[serde(default)]
    plan: Option<String>,
}

/// Assign a free-text plan from a trainer to a client.
async fn assign_plan(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AssignPlanRequest>,
) -> Result<Json<Confirmation>> {
    let plan = Plan {
        id: None,
        trainer: require_text(req.trainer.as_deref(), "trainer")?,
        client: require_text(req.client.as_deref(), "client")?,
        plan: require_text(req.plan.as_deref(), "plan")?,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    state.store.insert_plan(&plan).await?;

    tracing::info!(trainer = %plan.trainer, client = %plan.client, "Plan assigned");

    Ok(Json(Confirmation::new("Plan assigned")))
}

/// List all plans authored by a trainer. Empty array if none.
async fn list_trainer_plans(
    State(state): State<Arc<AppState>>,
    Path(trainer): Path<String>,
) -> Result<Json<Vec<PlanResponse>>> {
    let plans = state.store.plans_for_trainer(&trainer).await?;
    Ok(Json(plans.into_iter().map(PlanResponse::from).collect()))
}

#[derive(Deserialize)]
pub struct UpdatePlanRequest {
    #[serde(default)]
    client: Option<String>,
    #[serde(default)]
    plan: Option<String>,
}

/// Update the client and plan body of a plan by id.
///
/// No existence check: an unknown id is a successful no-op. A malformed id
/// surfaces as a store error.
async fn update_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdatePlanRequest>,
) -> Result<Json<Confirmation>> {
    let id = parse_plan_id(&id)?;
    state
        .store
        .update_plan(id, req.client.as_deref(), req.plan.as_deref())
        .await?;

    tracing::info!(plan_id = %id, "Plan updated");

    Ok(Json(Confirmation::new("Plan updated")))
}

/// Delete a plan by id. No existence check.
async fn delete_plan(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Confirmation>> {
    let id = parse_plan_id(&id)?;
    state.store.delete_plan(id).await?;

    tracing::info!(plan_id = %id, "Plan deleted");

    Ok(Json(Confirmation::new("Plan deleted")))
}

/// Parse a plan document id from the path.
///
/// A malformed id maps onto the dependency-error path (500), matching the
/// store driver's own cast failure rather than a validation rejection.
fn parse_plan_id(raw: &str) -> Result<ObjectId> {
    ObjectId::parse_str(raw).map_err(|e| AppError::Database(format!("Invalid plan id: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_id_accepts_hex() {
        let id = ObjectId::new();
        assert_eq!(parse_plan_id(&id.to_hex()).unwrap(), id);
    }

    #[test]
    fn test_parse_plan_id_rejects_junk() {
        assert!(matches!(
            parse_plan_id("not-an-id"),
            Err(AppError::Database(_))
        ));
    }
}
