//! Terminal chat client.
//!
//! One persistent connection to the server, driven by a single-task event
//! loop over three sources:
//! - terminal lines, each one a submission
//! - the outbound queue fed by accepted submissions
//! - frames arriving from the server
//!
//! A failed connect is not retried. The agent stays in the `Closed` state
//! and keeps reading input, dropping every submission.

mod agent;
mod connection;
mod surface;

use agent::ChatAgent;
use connection::Connection;
use surface::{Surface, TerminalSurface};

use crate::config::Config;
use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{self, Message as Frame};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to read terminal input: {0}")]
    Input(#[from] std::io::Error),
}

/// Run the client until terminal input ends.
pub async fn run(config: &Config) -> Result<(), ClientError> {
    let input = BufReader::new(tokio::io::stdin());
    run_with(&config.url, input, TerminalSurface::stdout()).await?;
    Ok(())
}

/// Event loop over any line source and display surface.
///
/// Returns the agent once input ends, so its final connection state can
/// be inspected.
async fn run_with<R, S>(url: &str, input: R, surface: S) -> Result<ChatAgent<S>, ClientError>
where
    R: AsyncBufRead + Unpin,
    S: Surface,
{
    let (connection, mut outbound) = Connection::new();
    let mut agent = ChatAgent::new(connection, surface);

    let mut stream = match connect_async(url).await {
        Ok((ws, _)) => {
            info!(url = %url, "Connected to WebSocket server");
            agent.connection_mut().mark_open();
            Some(ws)
        }
        Err(e) => {
            warn!(url = %url, error = %e, "Could not connect to WebSocket server");
            agent.connection_mut().mark_closed();
            None
        }
    };

    let mut lines = input.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(mut input) => {
                    agent.submit(&mut input);
                }
                None => break,
            },

            Some(payload) = outbound.recv() => {
                if let Some(ws) = stream.as_mut() {
                    if let Err(e) = ws.send(Frame::text(payload)).await {
                        debug!(error = %e, "Send failed");
                        agent.connection_mut().mark_closed();
                        stream = None;
                    }
                }
            }

            frame = next_frame(&mut stream) => match frame {
                Some(Ok(frame)) => {
                    if let Some(payload) = frame_text(frame) {
                        agent.on_receive(payload);
                    }
                }
                Some(Err(e)) => {
                    debug!(error = %e, "Connection lost");
                    agent.connection_mut().mark_closed();
                    stream = None;
                }
                None => {
                    debug!("Connection closed by server");
                    agent.connection_mut().mark_closed();
                    stream = None;
                }
            },
        }
    }

    if let Some(mut ws) = stream {
        if agent.connection().is_open() {
            if let Err(e) = ws.close(None).await {
                debug!(error = %e, "Close failed");
            }
        }
    }

    Ok(agent)
}

/// Next inbound frame, or pending forever once the stream is gone.
async fn next_frame(
    stream: &mut Option<WsStream>,
) -> Option<Result<Frame, tungstenite::Error>> {
    match stream {
        Some(ws) => ws.next().await,
        None => std::future::pending().await,
    }
}

/// Payload of a data frame as text. Control frames carry none.
fn frame_text(frame: Frame) -> Option<String> {
    match frame {
        Frame::Text(text) => Some(text.to_string()),
        Frame::Binary(data) => Some(String::from_utf8_lossy(&data).into_owned()),
        _ => None,
    }
}
