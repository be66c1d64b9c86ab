//! Axum router assembly.

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// The dashboard lives at `/analytics`; the root path redirects there since
/// the service has no other page. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::permanent("/analytics") }))
        .route("/analytics", get(crate::dashboard::analytics))
        .route("/health", get(health_check))
        .fallback(crate::error::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// JSON body returned by the liveness probe.
#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health_check() -> axum::Json<HealthBody> {
    axum::Json(HealthBody { status: "healthy" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState::new("http://localhost:3000/public/dashboard/test")
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn should_return_healthy_status_when_health_check_called() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"healthy"}"#);
    }

    #[tokio::test]
    async fn should_render_analytics_page() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/analytics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response).await;
        assert!(body.contains("Live Analytics Dashboard"));
        assert!(body.contains("http://localhost:3000/public/dashboard/test"));
    }

    #[tokio::test]
    async fn should_redirect_root_to_analytics() {
        let app = build(test_state());

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
        assert_eq!(response.headers()["location"], "/analytics");
    }

    #[tokio::test]
    async fn should_render_not_found_page_for_unknown_path() {
        let app = build(test_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_string(response).await.contains("Page not found"));
    }
}
