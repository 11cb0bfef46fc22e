//! HTTP protocol implementation
//!
//! Handles request body extraction, the login/signup endpoints, and
//! response formatting.

pub mod extract;
pub mod handlers;
pub mod payloads;
pub mod responses;

pub use extract::JsonFields;
pub use handlers::{login, signup};
pub use payloads::{LoginRequest, MessageResponse, SignupRequest};
pub use responses::ApiError;
