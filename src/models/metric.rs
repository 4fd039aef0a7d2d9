// SPDX-License-Identifier: MIT

//! Body metric model for storage and API.

use serde::{Deserialize, Serialize};

/// Dated body-measurement snapshot stored in the `metrics` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metric {
    /// Owner email
    pub email: String,
    /// Measurement date as supplied by the caller
    pub date: String,
    /// Weight (unit left to the caller)
    pub weight: f64,
    /// Body-mass index
    pub bmi: f64,
    /// Body-fat percentage, 0 when not supplied
    #[serde(default)]
    pub fat: f64,
    /// When this record was stored (RFC 3339)
    pub created_at: String,
}
