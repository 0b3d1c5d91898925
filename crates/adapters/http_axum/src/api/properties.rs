//! Handler for the repository custom property values endpoint.

use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Path, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Map, Value};

use propmock_domain::properties;
use propmock_domain::repository::RepositoryRef;

use crate::error::ApiError;

/// Request body for a property values update.
///
/// Buffers the body before handing it to [`Json`], so that an empty body
/// (whatever its framing) or a request without a JSON content type reads as
/// an empty object and reaches validation. Non-empty bodies that claim to be
/// JSON but fail to parse keep axum's own rejection.
pub struct Payload(pub Value);

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = JsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = Bytes::from_request(Request::new(body), state).await?;
        if bytes.is_empty() {
            return Ok(Self::empty());
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::MissingJsonContentType(_)) => Ok(Self::empty()),
            Err(rejection) => Err(rejection),
        }
    }
}

impl Payload {
    fn empty() -> Self {
        Self(Value::Object(Map::new()))
    }
}

/// Possible responses from the update endpoint.
#[derive(Debug)]
pub enum UpdateResponse {
    NoContent,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `PATCH /repos/:owner/:repo_name/properties/values`
pub async fn update_values(
    Path(repo): Path<RepositoryRef>,
    Payload(body): Payload,
) -> Result<UpdateResponse, ApiError> {
    tracing::info!("Mock intercepted: PATCH {}", repo.properties_values_path());
    tracing::info!("Request body: {body}");

    properties::validate(&body).map_err(|err| {
        tracing::debug!(repository = %repo, reason = %err.reason(), "rejecting property update");
        ApiError::from(err)
    })?;

    Ok(UpdateResponse::NoContent)
}
