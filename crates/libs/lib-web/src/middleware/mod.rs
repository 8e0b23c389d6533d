//! # HTTP Middleware
//!
//! Cross-cutting request plumbing:
//!
//! - **[`mw_req_stamp`]**: unique request ID on every request/response
//! - **[`mw_logging`]**: structured request/response logging

pub mod mw_logging;
pub mod mw_req_stamp;

pub use mw_logging::log_requests;
pub use mw_req_stamp::stamp_req;
