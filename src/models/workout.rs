// SPDX-License-Identifier: MIT

//! Workout model for storage and API.

use serde::{Deserialize, Serialize};

/// Workout document stored in the `workouts` collection.
///
/// Owned by `email` — a string-equality join against accounts, not an
/// enforced reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Owner email
    pub email: String,
    /// Activity type ("run", "cycling", ...)
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Duration in minutes
    pub duration: i64,
    /// Calories burned
    pub calories: i64,
    /// Workout date as supplied by the caller, not validated
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// When this record was logged (RFC 3339)
    pub created_at: String,
}
