// SPDX-License-Identifier: MIT

//! Request timing and logging middleware.

use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// Log method, path, status, duration, and client agent for every request.
///
/// Runs after the response is produced so the status and elapsed time are
/// final.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let started = Instant::now();
    let response = next.run(req).await;
    let elapsed = started.elapsed();

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = elapsed.as_millis() as u64,
        user_agent = %user_agent,
        "Request handled"
    );

    response
}
