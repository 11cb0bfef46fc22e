use log::{info, warn};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::server::router::router;
use crate::storage::{SharedUserStore, UserStore};

pub struct Server {
    store: SharedUserStore,
    listener: TcpListener,
    config: Arc<ServerConfig>,
}

impl Server {
    /// Binds the listener. The store is owned by the server from here on.
    pub async fn new(config: ServerConfig, store: UserStore) -> Result<Self, ServerError> {
        let listen_address = config.listen_address();

        let listener = TcpListener::bind(&listen_address).await.map_err(|e| {
            warn!("Failed to bind to {}: {}", listen_address, e);
            ServerError::from(e)
        })?;
        info!("Server bound to {}", listen_address);

        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            listener,
            config: Arc::new(config),
        })
    }

    /// Address the listener is actually bound to (resolves port 0).
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Handle to the store the server's handlers use
    pub fn store(&self) -> SharedUserStore {
        Arc::clone(&self.store)
    }

    /// Serves requests until Ctrl-C.
    pub async fn start(self) -> Result<(), ServerError> {
        self.start_with_shutdown(shutdown_signal()).await
    }

    /// Serves requests until `shutdown` completes; in-flight requests finish first.
    pub async fn start_with_shutdown<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.local_addr()?;
        let app = router(self.store, &self.config);

        info!("Server running on http://{}", addr);

        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            // Without a signal handler the server runs until killed.
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
