//! API error type.
//!
//! Every failure the catalog API reports is a 400 carrying a JSON string
//! `"Error: <message>"`, which is what the viewer front-end expects.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::storage::StoreError;
use shared::ValidationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Invalid request body: {0}")]
    Body(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store(e) => tracing::error!("Store error: {}", e),
            other => tracing::warn!("Rejected request: {}", other),
        }
        (self.status(), Json(format!("Error: {}", self))).into_response()
    }
}
