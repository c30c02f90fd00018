use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum FridgeError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

impl FridgeError {
    pub fn status(&self) -> StatusCode {
        match self {
            FridgeError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            FridgeError::DatabaseError(_) | FridgeError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text of the underlying error, without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            FridgeError::DatabaseError(e) => e.to_string(),
            FridgeError::Io(e) => e.to_string(),
            FridgeError::InvalidBody(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for FridgeError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = ApiErrorResponse {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Error payload returned to clients: `{"error": "..."}`.
#[derive(Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}
