//! Mocked GitHub REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod properties;

use axum::Router;
use axum::routing::patch;

/// Build the sub-router holding every mocked GitHub endpoint.
pub fn routes() -> Router {
    Router::new().route(
        "/repos/{owner}/{repo_name}/properties/values",
        patch(properties::update_values),
    )
}
