//! Endpoint handlers for the auth server.
//!
//! Each handler decodes its fields, runs the matching auth operation while
//! holding the store lock, and formats the outcome.

use crate::auth;
use crate::error::handlers::log_auth_failure;
use crate::middleware::logging::log_signup;
use crate::protocol::extract::JsonFields;
use crate::protocol::payloads::{LoginRequest, MessageResponse, SignupRequest};
use crate::protocol::responses::{ApiError, LOGIN_SUCCESS, SIGNUP_SUCCESS};
use crate::storage::SharedUserStore;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

/// Handles `POST /login`: 200 with the user's name, or 401.
pub async fn login(
    State(store): State<SharedUserStore>,
    JsonFields(request): JsonFields<LoginRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let email = request.email.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    let store = store.lock().await;
    match auth::login(&store, &email, &password) {
        Ok(result) => Ok(Json(MessageResponse::with_name(LOGIN_SUCCESS, result.name))),
        Err(e) => {
            log_auth_failure("Login", &e);
            Err(e.into())
        }
    }
}

/// Handles `POST /signup`: 201 with the new user's name, or 400/409.
///
/// The lock is held across the duplicate check and the append, so two
/// concurrent signups for one email cannot both succeed.
pub async fn signup(
    State(store): State<SharedUserStore>,
    JsonFields(request): JsonFields<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let mut store = store.lock().await;
    let result = auth::signup(
        &mut store,
        request.name.as_deref(),
        request.email.as_deref(),
        request.password.as_deref(),
    );
    drop(store);

    match result {
        Ok(created) => {
            log_signup(&created.name, &created.email, created.user_count);
            Ok((
                StatusCode::CREATED,
                Json(MessageResponse::with_name(SIGNUP_SUCCESS, created.name)),
            ))
        }
        Err(e) => {
            log_auth_failure("Signup", &e);
            Err(e.into())
        }
    }
}
