// SPDX-License-Identifier: MIT

//! Training plan model for storage and API.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Trainer-authored plan stored in the `plans` collection.
///
/// Unlike the other collections, plans are addressed by their store-assigned
/// document id for update and delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// Document id, assigned by the store on insert.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// Authoring trainer's email
    pub trainer: String,
    /// Assigned client's email
    pub client: String,
    /// Free-text plan body
    pub plan: String,
    /// When this plan was assigned (RFC 3339)
    pub created_at: String,
}

/// Plan as returned by the API, with the id rendered as a hex string.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub id: String,
    pub trainer: String,
    pub client: String,
    pub plan: String,
    pub created_at: String,
}

impl From<Plan> for PlanResponse {
    fn from(plan: Plan) -> Self {
        Self {
            id: plan.id.map(|id| id.to_hex()).unwrap_or_default(),
            trainer: plan.trainer,
            client: plan.client,
            plan: plan.plan,
            created_at: plan.created_at,
        }
    }
}
