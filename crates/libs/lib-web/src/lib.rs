//! # Web Library
//!
//! HTTP handlers, middleware, templates, and server setup for the email
//! validation form.

pub mod handlers;
pub mod middleware;
pub mod server;
pub mod templates;

pub use server::{start_server, ServerConfig};
