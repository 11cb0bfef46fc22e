//! Authentication system
//!
//! Login and signup rules evaluated against the user store.

pub mod results;
pub mod validator;

pub use results::{LoginResult, SignupResult};
pub use validator::{MIN_PASSWORD_LENGTH, login, signup};
