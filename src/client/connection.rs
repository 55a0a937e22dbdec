//! Connection state machine for the chat client.
//!
//! The connection is an explicitly owned object: the agent queries its
//! state before sending, and the event loop moves it forward as the
//! transport opens and closes.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Lifecycle of the client connection.
///
/// Transitions only move forward: `Connecting -> Open -> Closed`, or
/// `Connecting -> Closed` when the connect attempt fails. `Closed` is
/// terminal; there is no reconnection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Open,
    Closed,
}

/// Client side of one server connection.
#[derive(Debug)]
pub struct Connection {
    state: ConnectionState,
    outbound: UnboundedSender<String>,
}

impl Connection {
    /// Create a connection in the `Connecting` state.
    ///
    /// Payloads accepted by [`Connection::send`] arrive on the returned
    /// receiver, which the event loop writes to the socket.
    pub fn new() -> (Self, UnboundedReceiver<String>) {
        let (outbound, rx) = mpsc::unbounded_channel();
        let connection = Self {
            state: ConnectionState::Connecting,
            outbound,
        };
        (connection, rx)
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ConnectionState::Open
    }

    /// Transport handshake completed. Ignored once closed.
    pub fn mark_open(&mut self) {
        if self.state == ConnectionState::Connecting {
            self.state = ConnectionState::Open;
        }
    }

    /// Transport closed, failed, or never connected.
    pub fn mark_closed(&mut self) {
        self.state = ConnectionState::Closed;
    }

    /// Queue a payload for transmission, fire-and-forget.
    ///
    /// Returns `false` without queueing anything unless the connection is
    /// open.
    pub fn send(&self, payload: String) -> bool {
        if !self.is_open() {
            return false;
        }
        self.outbound.send(payload).is_ok()
    }
}
