//! Authentication validator
//!
//! Implements the login and signup rules. Both operations take the store
//! explicitly; callers serialize access so a signup's lookup and append
//! happen without interleaving.

use super::results::{LoginResult, SignupResult};
use crate::error::AuthError;
use crate::storage::{UserRecord, UserStore};

/// Shortest password accepted at signup, in characters.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Returns the value when it is present and non-empty.
fn required(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}

/// Checks an email/password pair against the store.
///
/// Unknown email and wrong password both yield `InvalidCredentials`.
pub fn login(store: &UserStore, email: &str, password: &str) -> Result<LoginResult, AuthError> {
    match store.find_by_credentials(email, password) {
        Some(user) => Ok(LoginResult {
            name: user.name.clone(),
        }),
        None => Err(AuthError::InvalidCredentials),
    }
}

/// Registers a new user.
///
/// Checks run in order and the first failure wins: missing or empty fields,
/// duplicate email, then password length. The store is only modified on
/// success, by exactly one appended record.
pub fn signup(
    store: &mut UserStore,
    name: Option<&str>,
    email: Option<&str>,
    password: Option<&str>,
) -> Result<SignupResult, AuthError> {
    let (Some(name), Some(email), Some(password)) =
        (required(name), required(email), required(password))
    else {
        return Err(AuthError::MissingFields);
    };

    if store.find_by_email(email).is_some() {
        return Err(AuthError::EmailAlreadyRegistered);
    }

    // Length in characters, not bytes
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort);
    }

    store.append(UserRecord::new(email, password, name));

    Ok(SignupResult {
        name: name.to_string(),
        email: email.to_string(),
        user_count: store.len(),
    })
}
