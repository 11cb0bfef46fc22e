//! Authentication result types
//!
//! Defines result structures returned by authentication operations.

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginResult {
    pub name: String,
}

/// Result of a successful signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupResult {
    pub name: String,
    pub email: String,
    /// Store size after the new record was appended
    pub user_count: usize,
}
