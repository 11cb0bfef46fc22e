//! In-memory user storage
//!
//! Holds the registered users for the lifetime of the process.

pub mod seed;
pub mod user_store;

pub use seed::SEED_USERS;
pub use user_store::{UserRecord, UserStore};

use std::sync::Arc;
use tokio::sync::Mutex;

/// Process-wide store handle shared by request handlers
pub type SharedUserStore = Arc<Mutex<UserStore>>;
