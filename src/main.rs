//! echo-chat: A WebSocket echo chat
//!
//! Two roles in one binary:
//! - `server`: accepts WebSocket connections and answers every message
//!   with `Bot reply: You said "<message>"`
//! - `client`: a terminal chat that sends each typed line and prints
//!   whatever the server sends back
//!
//! Features:
//! - Plain text frames, no sub-protocol
//! - Independent connections with no shared state
//! - Configuration via CLI arguments or TOML file

mod client;
mod config;
mod message;
mod protocols;
mod server;

use config::{Config, Role};
use server::Server;
use tracing::info;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    // Server logs go to stdout; the client keeps stdout for the chat itself
    let writer = match config.role {
        Role::Server => BoxMakeWriter::new(std::io::stdout),
        Role::Client => BoxMakeWriter::new(std::io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .init();

    match config.role {
        Role::Server => run_server(config).await,
        Role::Client => run_client(config).await,
    }
}

/// Run the echo server. A bind failure ends the process.
async fn run_server(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!(listen = %config.listen, "Starting echo-chat server");
    let server = Server::bind(&config).await?;
    server.run().await?;
    Ok(())
}

/// Run the terminal client until input ends
async fn run_client(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    info!(url = %config.url, "Starting echo-chat client");
    client::run(&config).await?;
    Ok(())
}
