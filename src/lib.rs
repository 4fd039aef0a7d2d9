// SPDX-License-Identifier: MIT

//! Fitlog: fitness-tracking web backend.
//!
//! This crate provides the backend API for registering clients and trainers,
//! logging workouts and body metrics, and assigning training plans. Every
//! operation is a single validate / store / respond handler over a MongoDB
//! document store.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;

use config::Config;
use db::Store;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Store,
}
