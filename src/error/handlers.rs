//! Error handlers
//!
//! Maps errors onto HTTP status codes and logs them.

use crate::error::types::{AuthError, ServerError};
use axum::http::StatusCode;
use log::{debug, error};

/// Log a fatal server error
pub fn handle_error(err: &ServerError) {
    error!("Auth Server Error: {}", err);
}

/// Log a rejected login or signup attempt
pub fn log_auth_failure(operation: &str, err: &AuthError) {
    debug!("{} rejected: {}", operation, err);
}

/// Convert an authentication error to its HTTP status code
pub fn error_to_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::MissingFields => StatusCode::BAD_REQUEST,
        AuthError::EmailAlreadyRegistered => StatusCode::CONFLICT,
        AuthError::PasswordTooShort => StatusCode::BAD_REQUEST,
        AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_auth_error_maps_to_a_client_error() {
        for err in [
            AuthError::MissingFields,
            AuthError::EmailAlreadyRegistered,
            AuthError::PasswordTooShort,
            AuthError::InvalidCredentials,
        ] {
            assert!(error_to_status(&err).is_client_error());
        }
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        assert_eq!(
            error_to_status(&AuthError::EmailAlreadyRegistered),
            StatusCode::CONFLICT
        );
    }
}
