//! Error types
//!
//! Domain-specific error types for authentication and server startup.

use crate::auth::MIN_PASSWORD_LENGTH;
use std::fmt;
use std::io;

/// Authentication failures. The `Display` text is the message sent to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    MissingFields,
    EmailAlreadyRegistered,
    PasswordTooShort,
    InvalidCredentials,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingFields => write!(f, "Missing required fields."),
            AuthError::EmailAlreadyRegistered => write!(f, "Email already registered."),
            AuthError::PasswordTooShort => write!(
                f,
                "Password must be at least {} characters.",
                MIN_PASSWORD_LENGTH
            ),
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Errors that stop the server from starting or serving
#[derive(Debug)]
pub enum ServerError {
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Config(e) => write!(f, "Configuration error: {}", e),
            ServerError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServerError::Config(e) => Some(e),
            ServerError::IoError(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for ServerError {
    fn from(error: config::ConfigError) -> Self {
        ServerError::Config(error)
    }
}

impl From<io::Error> for ServerError {
    fn from(error: io::Error) -> Self {
        ServerError::IoError(error)
    }
}
