//! # Request Stamping Middleware
//!
//! Assigns every request a UUID at arrival. The stamp travels in request
//! extensions so downstream middleware can correlate log lines, and the ID
//! is echoed back as the `X-Request-ID` response header.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use uuid::Uuid;

/// Request metadata for correlation.
#[derive(Clone, Debug)]
pub struct RequestStamp {
    /// Unique request identifier
    pub id: String,
    /// Arrival time, used by the logging middleware for duration
    pub received_at: Instant,
}

impl RequestStamp {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            received_at: Instant::now(),
        }
    }
}

/// Request stamping middleware. Must be installed before [`crate::middleware::log_requests`]
/// so the stamp is present when the logger runs.
pub async fn stamp_req(mut req: Request, next: Next) -> Response {
    let stamp = RequestStamp::new();

    req.extensions_mut().insert(stamp.clone());

    let mut res = next.run(req).await;

    if let Ok(header_value) = HeaderValue::from_str(&stamp.id) {
        res.headers_mut().insert("X-Request-ID", header_value);
    }

    res
}
