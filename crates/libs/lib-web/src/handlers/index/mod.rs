//! # Form Page Handlers
//!
//! The two endpoints of the application: rendering the form and validating
//! a submission. Validation itself lives in [`lib_core::validate`]; these
//! handlers only move strings between the form and the verdict chain.

use axum::extract::Form;
use axum::response::IntoResponse;
use serde::Deserialize;
use tracing::{info, instrument};

use lib_core::validate_email;

use crate::templates::{HtmlTemplate, IndexTemplate};

/// Form body for `POST /`.
///
/// `email` defaults to the empty string when the field is absent, so a
/// malformed submission still produces a defined verdict (the length rule
/// rejects the empty string) instead of a deserialization error.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailForm {
    #[serde(default)]
    pub email: String,
}

/// `GET /` - render the form with no verdict.
pub async fn show_form() -> impl IntoResponse {
    HtmlTemplate(IndexTemplate {
        candidate: String::new(),
        verdict: None,
    })
}

/// `POST /` - run the submitted candidate through the rule chain and
/// re-render the page with the verdict embedded.
///
/// Always responds 200: a rejected candidate is a computed outcome, not an
/// error. The candidate itself is never logged, only its length and whether
/// it was accepted.
#[instrument(skip(form))]
pub async fn submit(Form(form): Form<EmailForm>) -> impl IntoResponse {
    let verdict = validate_email(&form.email);

    info!(
        candidate_chars = form.email.chars().count(),
        accepted = verdict.is_valid(),
        "[VALIDATE] verdict computed"
    );

    HtmlTemplate(IndexTemplate {
        candidate: form.email,
        verdict: Some(verdict.message().to_string()),
    })
}
