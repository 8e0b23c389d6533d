//! # Core Library
//!
//! Domain core for the email validation form: the validation predicate,
//! application configuration, and the centralized error type.

pub mod config;
pub mod error;
pub mod validate;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
pub use validate::{validate_email, Verdict};
