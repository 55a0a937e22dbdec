//! Echo protocol handler for the Tokio runtime.

use futures_util::{SinkExt, StreamExt};
use std::borrow::Cow;
use std::net::SocketAddr;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, info, trace};

use super::format_reply;

/// Handle an echo protocol connection.
///
/// Performs the WebSocket handshake, then answers every text or binary
/// frame with a reply on the same connection. Returns once the peer closes
/// or the transport fails; both are logged as a disconnection.
pub async fn handle_connection(
    stream: TcpStream,
    peer: SocketAddr,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut ws = tokio_tungstenite::accept_async(stream).await?;
    info!(peer = %peer, "A client connected");

    let result = loop {
        let frame = match ws.next().await {
            Some(Ok(frame)) => frame,
            Some(Err(e)) => break Err(e),
            // EOF without a close frame
            None => break Ok(()),
        };

        let payload = match payload_text(&frame) {
            Some(payload) => payload,
            // The next poll flushes the close reply, then the stream ends
            None if frame.is_close() => continue,
            None => {
                trace!(peer = %peer, "Ignoring control frame");
                continue;
            }
        };

        info!(peer = %peer, "received: {payload}");

        if let Err(e) = ws.send(Message::text(format_reply(&payload))).await {
            break Err(e);
        }
    };

    info!(peer = %peer, "Client disconnected");

    if let Err(e) = result {
        debug!(peer = %peer, error = %e, "Connection ended with transport error");
    }

    Ok(())
}

/// Extract the payload of a data frame.
///
/// Binary payloads are decoded as lossy UTF-8. Control frames yield `None`.
fn payload_text(frame: &Message) -> Option<Cow<'_, str>> {
    match frame {
        Message::Text(text) => Some(Cow::Borrowed(text.as_str())),
        Message::Binary(data) => Some(String::from_utf8_lossy(data)),
        _ => None,
    }
}
