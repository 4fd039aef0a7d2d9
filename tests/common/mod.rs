// SPDX-License-Identifier: MIT

use fitlog::config::Config;
use fitlog::db::Store;
use fitlog::routes::create_router;
use fitlog::AppState;
use std::sync::Arc;

/// Check if a real document store is available via environment variable.
#[allow(dead_code)]
pub fn store_available() -> bool {
    std::env::var("MONGODB_URI").is_ok()
}

/// Skip test with message if no store is available.
#[macro_export]
macro_rules! require_store {
    () => {
        if !crate::common::store_available() {
            eprintln!("⚠️  Skipping: MONGODB_URI not set");
            return;
        }
    };
}

/// Create a test app with an offline mock store.
///
/// Validation paths work normally; any handler that reaches the store gets a
/// database error (500).
#[allow(dead_code)]
pub fn create_test_app() -> axum::Router {
    let config = Config::default();
    let store = Store::new_mock();
    let state = Arc::new(AppState { config, store });
    create_router(state)
}

/// Create a test app backed by the real store from MONGODB_URI.
#[allow(dead_code)]
pub async fn create_store_app() -> axum::Router {
    let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let store = Store::connect(&uri).await.expect("Failed to create store");
    store.ping().await.expect("Store did not answer ping");
    let state = Arc::new(AppState {
        config: Config::default(),
        store,
    });
    create_router(state)
}

/// Generate an email unique to this test run, so suites are rerunnable
/// against a persistent store.
#[allow(dead_code)]
pub fn unique_email(prefix: &str) -> String {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default();
    format!("{}-{}-{}@test.fitlog", prefix, std::process::id(), nanos)
}
