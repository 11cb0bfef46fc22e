//! Request and response bodies
//!
//! Every request field is optional so that absent fields reach the auth
//! rules instead of failing deserialization. JSON `null` reads as absent.

use serde::{Deserialize, Serialize};

/// Body of `POST /login`
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of `POST /signup`
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SignupRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Body of every response: a message, plus the user's name on success
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            name: None,
        }
    }

    pub fn with_name(message: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            name: Some(name.into()),
        }
    }
}
