//! Request body extraction
//!
//! `JsonFields` reads a JSON object into a field struct. A request without a
//! JSON content type, or with an empty body, yields the struct's defaults
//! (every field absent). Anything that is present but not a JSON object with
//! fields of the expected types is rejected with 400.

use crate::protocol::responses::ApiError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use log::debug;
use serde::de::DeserializeOwned;

/// Field map decoded from a JSON request body
#[derive(Debug, Clone, Default)]
pub struct JsonFields<T>(pub T);

/// True for `application/json` and `application/*+json`, ignoring parameters.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// Decodes a body already known to carry JSON.
pub fn decode_fields<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    let value: serde_json::Value = serde_json::from_slice(body).map_err(|e| {
        debug!("Rejected request body: {}", e);
        ApiError::malformed_body()
    })?;

    if !value.is_object() {
        debug!("Rejected request body: not a JSON object");
        return Err(ApiError::malformed_body());
    }

    serde_json::from_value(value).map_err(|e| {
        debug!("Rejected request body: {}", e);
        ApiError::malformed_body()
    })
}

impl<S, T> FromRequest<S> for JsonFields<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = is_json_content_type(req.headers());

        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if !is_json {
            return Ok(JsonFields(T::default()));
        }

        decode_fields(&body)
            .map(JsonFields)
            .map_err(IntoResponse::into_response)
    }
}
