//! Axum router assembly.

use axum::Router;
use tower_http::trace::TraceLayer;

/// Build the top-level axum [`Router`].
///
/// Mounts the mocked GitHub routes at the root, the same paths the real
/// API uses. Includes a [`TraceLayer`] that logs each HTTP request/response
/// at the `DEBUG` level using the `tracing` ecosystem.
///
/// Unmatched paths fall through to axum's default `404`; other methods on a
/// mocked path get its default `405`.
pub fn build() -> Router {
    Router::new()
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn should_return_not_found_for_unknown_path() {
        let response = build()
            .oneshot(
                Request::builder()
                    .uri("/repos/octo/hello/topics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_other_methods_on_mocked_path() {
        let response = build()
            .oneshot(
                Request::builder()
                    .method(Method::GET)
                    .uri("/repos/octo/hello/properties/values")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
