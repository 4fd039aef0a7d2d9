//! Database layer (MongoDB document store).

pub mod store;

pub use store::Store;

/// Fixed database name.
pub const DATABASE: &str = "fittrack";

/// Collection names as constants.
pub mod collections {
    pub const ACCOUNTS: &str = "accounts";
    pub const WORKOUTS: &str = "workouts";
    pub const METRICS: &str = "metrics";
    pub const PLANS: &str = "plans";
}
