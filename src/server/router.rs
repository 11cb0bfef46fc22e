//! Route table
//!
//! `POST /login` and `POST /signup`, with permissive CORS, a body size
//! limit, and request logging.

use crate::config::ServerConfig;
use crate::middleware::log_request;
use crate::protocol::handlers;
use crate::storage::SharedUserStore;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::post;
use tower_http::cors::{Any, CorsLayer};

/// Builds the application router around a shared store.
pub fn router(store: SharedUserStore, config: &ServerConfig) -> Router {
    // Cross-origin requests are allowed from anywhere.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/login", post(handlers::login))
        .route("/signup", post(handlers::signup))
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors)
        .layer(axum_mw::from_fn(log_request))
        .with_state(store)
}
