//! Chat message model.

/// Which side produced a message. Display-only, never sent on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Typed by the local user.
    Local,
    /// Received from the server.
    Remote,
}

/// A single chat message. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    text: String,
    origin: Origin,
}

impl Message {
    pub fn local(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Local,
        }
    }

    pub fn remote(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Origin::Remote,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }
}
