//! # Askama Template Definitions
//!
//! One template struct per page, plus the [`HtmlTemplate`] response wrapper
//! that turns a rendered template into an HTML response and maps rendering
//! failures to a 500.

use askama::Template;
use axum::response::{Html, IntoResponse, Response};
use lib_core::AppError;

/// The single form page. Rendered for both `GET /` (no verdict) and
/// `POST /` (verdict present, candidate echoed back into the input).
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Submitted value redisplayed in the input field. Empty on GET.
    pub candidate: String,
    /// Verdict message to embed, if a candidate was submitted.
    pub verdict: Option<String>,
}

/// Wrapper that renders any Askama template into an HTML response.
pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => AppError::Render(err.to_string()).into_response(),
        }
    }
}
