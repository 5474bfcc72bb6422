use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::users::repo::StoreError;

/// Error surfaced by a handler. Every variant currently answers
/// `500 Internal Server Error` with the message as a plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid user id: {0}")]
    Path(String),

    #[error("invalid request body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    fn kind(&self) -> &'static str {
        match self {
            ApiError::Path(_) => "path",
            ApiError::Decode(_) => "decode",
            ApiError::Store(StoreError::NotFound { .. }) => "not_found",
            ApiError::Store(StoreError::Database(_)) => "database",
        }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        error!(error = %message, kind = self.kind(), "request failed");
        (self.status(), message).into_response()
    }
}
