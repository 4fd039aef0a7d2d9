// SPDX-License-Identifier: MIT

//! Account registration, login, and diagnostic routes.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{Account, Role, RoleProfile};
use crate::routes::input::require_text;
use crate::routes::Confirmation;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/test", post(echo))
}

// ─── Registration ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    fullname: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    role: Option<String>,
    // Role-specific fields
    #[serde(default)]
    goal: Option<String>,
    #[serde(default)]
    specialization: Option<String>,
    #[serde(default)]
    experience: Option<String>,
    #[serde(default)]
    certification: Option<String>,
}

/// Register a new client or trainer account.
///
/// Check-then-insert: two concurrent registrations with the same email can
/// both pass the lookup; the unique index on `accounts.email` is the
/// store-level backstop.
async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Confirmation>)> {
    let fullname = require_text(req.fullname.as_deref(), "fullname")?;
    let email = require_text(req.email.as_deref(), "email")?;
    let password = require_text(req.password.as_deref(), "password")?;
    let role_raw = require_text(req.role.as_deref(), "role")?;
    let role = Role::parse(&role_raw)
        .ok_or_else(|| AppError::Validation("role must be client or trainer".to_string()))?;

    let profile = match role {
        Role::Client => RoleProfile::Client {
            goal: require_text(req.goal.as_deref(), "goal")?,
        },
        Role::Trainer => RoleProfile::Trainer {
            specialization: require_text(req.specialization.as_deref(), "specialization")?,
            experience: require_text(req.experience.as_deref(), "experience")?,
            certification: req.certification.filter(|c| !c.trim().is_empty()),
        },
    };

    if state.store.find_account(&email).await?.is_some() {
        return Err(AppError::Conflict("Email already registered".to_string()));
    }

    let account = Account {
        fullname,
        email,
        password,
        profile,
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    state.store.insert_account(&account).await?;

    tracing::info!(email = %account.email, role = role.as_str(), "Account registered");

    Ok((
        StatusCode::CREATED,
        Json(Confirmation::new("Account registered")),
    ))
}

// ─── Login ───────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

/// Login response: profile plus the role-specific fields, flattened.
#[derive(Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub fullname: String,
    pub email: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

/// Authenticate by exact match on the (email, password, role) triple.
///
/// No session or token is issued; the client is trusted to remember login
/// state. Cleartext comparison is the current credential model.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let email = require_text(req.email.as_deref(), "email")?;
    let password = require_text(req.password.as_deref(), "password")?;
    let role_raw = require_text(req.role.as_deref(), "role")?;
    let role = Role::parse(&role_raw).ok_or(AppError::InvalidCredentials)?;

    let account = state
        .store
        .find_account_with_credentials(&email, &password, role)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    tracing::info!(email = %account.email, role = role.as_str(), "Login succeeded");

    Ok(Json(LoginResponse {
        success: true,
        fullname: account.fullname,
        email: account.email,
        profile: account.profile,
    }))
}

// ─── Diagnostics ─────────────────────────────────────────────

/// Echo the request body back. Diagnostic endpoint.
///
/// Accepts any body; non-JSON input echoes as null.
async fn echo(body: Bytes) -> Json<Value> {
    Json(serde_json::from_slice(&body).unwrap_or(Value::Null))
}

/// Acknowledge logout. There is no server-side session to invalidate.
async fn logout() -> Json<Confirmation> {
    Json(Confirmation::new("Logged out"))
}
