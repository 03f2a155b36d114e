//! Explicit error responses, used only in strict mode.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::legacy::error::BridgeError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request body is not a valid person: {0}")]
    UnprocessableBody(#[source] serde_json::Error),

    #[error("legacy service call failed: {0}")]
    BadGateway(#[from] BridgeError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnprocessableBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}
