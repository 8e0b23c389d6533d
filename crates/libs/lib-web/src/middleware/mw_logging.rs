//! # Request/Response Logging Middleware
//!
//! Structured logging for every HTTP request and response: method, path,
//! status, and duration, correlated by the request stamp.
//!
//! Form bodies are never logged. The only POST body this service receives
//! is a submitted email candidate, which is user data.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{error, info, warn};

use crate::middleware::mw_req_stamp::RequestStamp;

/// Request/response logging middleware.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (request_id, start) = req
        .extensions()
        .get::<RequestStamp>()
        .map(|s| (s.id.clone(), s.received_at))
        .unwrap_or_else(|| ("unknown".to_string(), Instant::now()));

    info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "[REQUEST] {} {}",
        method,
        path
    );

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms) [SERVER ERROR]",
            method,
            path,
            status.as_u16(),
            duration.as_millis()
        );
    } else if status.is_client_error() {
        warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms) [CLIENT ERROR]",
            method,
            path,
            status.as_u16(),
            duration.as_millis()
        );
    } else {
        info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "[RESPONSE] {} {} -> {} ({}ms)",
            method,
            path,
            status.as_u16(),
            duration.as_millis()
        );
    }

    response
}
