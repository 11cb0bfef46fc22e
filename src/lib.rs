pub mod auth;
pub mod config;
pub mod error;
pub mod middleware;
pub mod protocol;
pub mod server;
pub mod storage;

pub use config::ServerConfig;
pub use server::Server;
pub use storage::UserStore;
