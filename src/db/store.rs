// SPDX-License-Identifier: MIT

//! MongoDB client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Accounts (registration, credential lookup)
//! - Workouts (logged activity records)
//! - Metrics (body-measurement snapshots)
//! - Plans (trainer-assigned training plans)

use std::time::Duration;

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

use crate::config::redact_uri;
use crate::db::{collections, DATABASE};
use crate::error::AppError;
use crate::models::{Account, Metric, Plan, Role, Workout};

/// Delay between connection attempts while the store is unreachable.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Document store client.
///
/// Cloning is cheap; the underlying driver client is shared. The driver
/// reconnects transparently if the connection drops, so the handle lives for
/// the whole process.
#[derive(Clone)]
pub struct Store {
    db: Option<mongodb::Database>,
}

impl Store {
    /// Create a store handle from a connection string.
    ///
    /// The driver connects lazily: this only parses the URI and starts the
    /// client, it does not require the server to be reachable. Use
    /// [`Store::wait_until_ready`] to probe the connection in the background.
    pub async fn connect(uri: &str) -> Result<Self, AppError> {
        let client = Client::with_uri_str(uri)
            .await
            .map_err(|e| AppError::Database(format!("Invalid store connection string: {}", e)))?;

        Ok(Self {
            db: Some(client.database(DATABASE)),
        })
    }

    /// Create a mock store for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { db: None }
    }

    /// Helper to get the database or return an error if offline.
    fn get_db(&self) -> Result<&mongodb::Database, AppError> {
        self.db
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    fn accounts(&self) -> Result<Collection<Account>, AppError> {
        Ok(self.get_db()?.collection(collections::ACCOUNTS))
    }

    fn workouts(&self) -> Result<Collection<Workout>, AppError> {
        Ok(self.get_db()?.collection(collections::WORKOUTS))
    }

    fn metrics(&self) -> Result<Collection<Metric>, AppError> {
        Ok(self.get_db()?.collection(collections::METRICS))
    }

    fn plans(&self) -> Result<Collection<Plan>, AppError> {
        Ok(self.get_db()?.collection(collections::PLANS))
    }

    // ─── Connection Lifecycle ────────────────────────────────────

    /// Probe the store until it responds, retrying forever.
    ///
    /// Runs in a background task so process startup is never blocked on the
    /// store. Failures are logged with credentials redacted from the URI.
    /// Once the store answers, the unique email index is ensured.
    pub async fn wait_until_ready(self, uri: String) {
        let target = redact_uri(&uri);
        loop {
            match self.ping().await {
                Ok(()) => {
                    tracing::info!(store = %target, database = DATABASE, "Connected to document store");
                    if let Err(e) = self.ensure_indexes().await {
                        tracing::warn!(error = %e, "Failed to ensure indexes");
                    }
                    return;
                }
                Err(e) => {
                    tracing::error!(
                        store = %target,
                        error = %e,
                        retry_in_secs = RETRY_DELAY.as_secs(),
                        "Document store unreachable, retrying"
                    );
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        }
    }

    /// Ping the store.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.get_db()?.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Ensure the unique index on account emails.
    ///
    /// Registration is check-then-insert; this index is the store-level
    /// backstop against two concurrent registrations racing past the check.
    pub async fn ensure_indexes(&self) -> Result<(), AppError> {
        let index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.accounts()?.create_index(index).await?;
        Ok(())
    }

    // ─── Account Operations ──────────────────────────────────────

    /// Look up an account by email.
    pub async fn find_account(&self, email: &str) -> Result<Option<Account>, AppError> {
        Ok(self.accounts()?.find_one(doc! { "email": email }).await?)
    }

    /// Exact-match credential lookup on the (email, password, role) triple.
    ///
    /// Passwords are compared as opaque strings by the store, per the current
    /// credential model.
    pub async fn find_account_with_credentials(
        &self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Option<Account>, AppError> {
        let filter = doc! {
            "email": email,
            "password": password,
            "role": role.as_str(),
        };
        Ok(self.accounts()?.find_one(filter).await?)
    }

    /// Store a new account.
    pub async fn insert_account(&self, account: &Account) -> Result<(), AppError> {
        self.accounts()?.insert_one(account).await?;
        Ok(())
    }

    // ─── Workout Operations ──────────────────────────────────────

    /// Store a logged workout.
    pub async fn insert_workout(&self, workout: &Workout) -> Result<(), AppError> {
        self.workouts()?.insert_one(workout).await?;
        Ok(())
    }

    /// Get all workouts owned by an email. Empty if none.
    pub async fn workouts_for(&self, email: &str) -> Result<Vec<Workout>, AppError> {
        let cursor = self.workouts()?.find(doc! { "email": email }).await?;
        Ok(cursor.try_collect().await?)
    }

    // ─── Metric Operations ───────────────────────────────────────

    /// Store a body-metric snapshot.
    pub async fn insert_metric(&self, metric: &Metric) -> Result<(), AppError> {
        self.metrics()?.insert_one(metric).await?;
        Ok(())
    }

    /// Get all metrics owned by an email. Empty if none.
    pub async fn metrics_for(&self, email: &str) -> Result<Vec<Metric>, AppError> {
        let cursor = self.metrics()?.find(doc! { "email": email }).await?;
        Ok(cursor.try_collect().await?)
    }

    // ─── Plan Operations ─────────────────────────────────────────

    /// Store a new plan assignment.
    pub async fn insert_plan(&self, plan: &Plan) -> Result<(), AppError> {
        self.plans()?.insert_one(plan).await?;
        Ok(())
    }

    /// Get all plans authored by a trainer. Empty if none.
    pub async fn plans_for_trainer(&self, trainer: &str) -> Result<Vec<Plan>, AppError> {
        let cursor = self.plans()?.find(doc! { "trainer": trainer }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Update the client and plan body of a plan by document id.
    ///
    /// Absent fields are left untouched. No existence check: updating an
    /// unknown id succeeds as a no-op.
    pub async fn update_plan(
        &self,
        id: ObjectId,
        client: Option<&str>,
        plan: Option<&str>,
    ) -> Result<(), AppError> {
        let mut changes = doc! {};
        if let Some(client) = client {
            changes.insert("client", client);
        }
        if let Some(plan) = plan {
            changes.insert("plan", plan);
        }
        if changes.is_empty() {
            return Ok(());
        }
        self.plans()?
            .update_one(doc! { "_id": id }, doc! { "$set": changes })
            .await?;
        Ok(())
    }

    /// Delete a plan by document id. No existence check.
    pub async fn delete_plan(&self, id: ObjectId) -> Result<(), AppError> {
        self.plans()?.delete_one(doc! { "_id": id }).await?;
        Ok(())
    }
}
