//! HTTP error response mapping.

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

/// Maps a template render failure to a 500 response.
///
/// Rendering a static template is expected to always succeed; if it ever
/// does not, the client gets a generic body and the detail goes to the log.
pub struct PageError(askama::Error);

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "template render error");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

/// Not-found page template.
#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate;

/// Router fallback — renders a minimal 404 page for unknown paths.
pub async fn not_found() -> Response {
    match NotFoundTemplate.render() {
        Ok(html) => (StatusCode::NOT_FOUND, Html(html)).into_response(),
        Err(err) => PageError::from(err).into_response(),
    }
}
