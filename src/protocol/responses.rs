//! HTTP response handling
//!
//! Success messages and the error response type.

use crate::error::AuthError;
use crate::error::handlers::error_to_status;
use crate::protocol::payloads::MessageResponse;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub const LOGIN_SUCCESS: &str = "Login successful";
pub const SIGNUP_SUCCESS: &str = "Account created successfully.";
pub const MALFORMED_BODY: &str = "Malformed request body.";

/// Failure response: a status code and a `{"message": ...}` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Body was not a JSON object with string fields
    pub fn malformed_body() -> Self {
        Self::new(StatusCode::BAD_REQUEST, MALFORMED_BODY)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        Self::new(error_to_status(&err), err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageResponse::new(self.message))).into_response()
    }
}
