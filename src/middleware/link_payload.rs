use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::FridgeError;

/// Request body shared by create and delete: `{"url": "..."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkRequestBody {
    pub url: String,
}

/// Decodes a [`LinkRequestBody`] from the raw body whatever its `Content-Type`.
/// Unreadable or undecodable bodies become a 400 carrying the decoder's message.
pub struct LinkPayload(pub LinkRequestBody);

impl<S> FromRequest<S> for LinkPayload
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(b) => b,
            Err(rejection) => {
                debug!(error = %rejection.body_text(), "failed to read link payload");
                return Err(FridgeError::InvalidBody(rejection.body_text()).into_response());
            }
        };

        match serde_json::from_slice::<LinkRequestBody>(&bytes) {
            Ok(body) => Ok(LinkPayload(body)),
            Err(e) => {
                debug!(error = %e, "rejected link payload");
                Err(FridgeError::InvalidBody(e.to_string()).into_response())
            }
        }
    }
}
