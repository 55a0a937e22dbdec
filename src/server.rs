//! WebSocket server for the echo chat.
//!
//! Binds the listening socket, accepts connections and hands each one to
//! the echo protocol handler on its own task.

use crate::config::Config;
use crate::protocols::echo;
use std::io;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

/// Server errors
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind to '{0}': {1}")]
    Bind(String, #[source] io::Error),
}

/// Server instance
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Bind the listening socket.
    ///
    /// Failing to acquire the address is fatal to the caller; there is no
    /// retry.
    pub async fn bind(config: &Config) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(&config.listen)
            .await
            .map_err(|e| ServerError::Bind(config.listen.clone(), e))?;

        Ok(Server { listener })
    }

    /// Address the server is actually listening on
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Begin accepting connections. Runs until the process exits.
    pub async fn run(self) -> Result<(), ServerError> {
        match self.local_addr() {
            Ok(addr) => info!("WebSocket server running on ws://{addr}"),
            Err(e) => debug!(error = %e, "Could not read local address"),
        }

        loop {
            match self.listener.accept().await {
                Ok((stream, peer)) => {
                    debug!(peer = %peer, "New TCP connection");

                    tokio::spawn(async move {
                        if let Err(e) = echo::handle_connection(stream, peer).await {
                            debug!(peer = %peer, error = %e, "WebSocket handshake failed");
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}
