//! HTTP error responses.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tictactoe_engine::MoveError;

/// JSON error envelope: `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason.
    pub detail: String,
}

/// Errors returned by request handlers.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ApiError {
    /// The engine rejected the move.
    #[display("{_0}")]
    Move(MoveError),

    /// The request body was not a valid move.
    #[display("{}", _0.body_text())]
    InvalidBody(JsonRejection),
}

impl ApiError {
    /// Status code reported to the client.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Move(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
