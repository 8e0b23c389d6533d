//! # HTTP Request Handlers
//!
//! Axum request handlers for the form page.
//!
//! - **[`index`]**: the validation form
//!   - `GET /` - Render the form with no verdict
//!   - `POST /` - Validate the submitted `email` field and re-render the
//!     form with the verdict message

pub mod index;
