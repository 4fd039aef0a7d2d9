// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod account;
pub mod metric;
pub mod plan;
pub mod workout;

pub use account::{Account, Role, RoleProfile};
pub use metric::Metric;
pub use plan::{Plan, PlanResponse};
pub use workout::Workout;
