//! Auth server - Entry Point
//!
//! Serves login and signup over HTTP against an in-memory user list.

use std::process::ExitCode;

use auth_app_server::error::ServerError;
use auth_app_server::error::handlers::handle_error;
use auth_app_server::{Server, ServerConfig, UserStore};
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    // RUST_LOG overrides the default `info` filter
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Launching auth server...");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            handle_error(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::load()?;
    let server = Server::new(config, UserStore::seeded()).await?;
    server.start().await
}
