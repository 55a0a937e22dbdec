//! Chat agent: mediates between user input, the connection and the
//! display surface.

use super::connection::Connection;
use super::surface::Surface;
use crate::message::Message;
use tracing::trace;

pub struct ChatAgent<S: Surface> {
    connection: Connection,
    surface: S,
}

impl<S: Surface> ChatAgent<S> {
    pub fn new(connection: Connection, surface: S) -> Self {
        Self {
            connection,
            surface,
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.connection
    }

    #[cfg(test)]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Submit the contents of the input field.
    ///
    /// Blank input and a connection that is not open are silent no-ops that
    /// leave `input` untouched. Otherwise the trimmed text is rendered as a
    /// local message, sent without waiting for acknowledgement, and the
    /// input is cleared.
    pub fn submit(&mut self, input: &mut String) -> bool {
        let text = input.trim();
        if text.is_empty() || !self.connection.is_open() {
            trace!(state = ?self.connection.state(), "Submission dropped");
            return false;
        }

        let text = text.to_string();
        self.render(Message::local(text.clone()));
        self.connection.send(text);
        input.clear();
        true
    }

    /// A payload arrived from the server. Rendered verbatim.
    pub fn on_receive(&mut self, payload: String) {
        self.render(Message::remote(payload));
    }

    pub fn render(&mut self, message: Message) {
        self.surface.append(&message);
        self.surface.scroll_to_latest();
    }
}
