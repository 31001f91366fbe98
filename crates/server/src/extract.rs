//! Request extractors.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{JsonApiError, DECODE_PAYLOAD_FAILED};

/// JSON body extractor that ignores `Content-Type`.
///
/// Clients such as `curl -d` send JSON labelled as form data; the body is
/// decoded as JSON either way. A body that is not valid JSON for `T` becomes
/// a 400 with `{"error": "Failed to decode request payload"}`; a body that
/// cannot be read at all (e.g. over the size limit) keeps the status axum
/// assigns to it.
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // Body read failures keep their own status (413 over the body limit)
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            debug!(error = %e, status = %e.status(), "failed to read request body");
            JsonApiError::new(e.status(), e.body_text())
        })?;
        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            debug!(error = %e, "failed to decode request payload");
            JsonApiError::bad_request(DECODE_PAYLOAD_FAILED)
        })
    }
}
