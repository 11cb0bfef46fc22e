//! Server core functionality
//!
//! This module contains the HTTP server, its router, and shutdown handling.

pub mod core;
pub mod router;

pub use core::Server;
pub use router::router;
