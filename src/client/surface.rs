//! Display surfaces for chat messages.

use crate::message::{Message, Origin};
use std::io::{self, Write};

/// Where rendered messages end up.
pub trait Surface {
    /// Append one message as a new entry.
    fn append(&mut self, message: &Message);

    /// Bring the most recent entry into view.
    fn scroll_to_latest(&mut self) {}
}

/// Line-oriented terminal surface.
///
/// Each message becomes one line tagged by origin. The terminal scrolls on
/// its own, so scrolling is just a flush.
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

fn tag(origin: Origin) -> &'static str {
    match origin {
        Origin::Local => "you> ",
        Origin::Remote => "bot> ",
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn append(&mut self, message: &Message) {
        // Nothing is surfaced to the user on failure
        let _ = writeln!(self.out, "{}{}", tag(message.origin()), message.text());
    }

    fn scroll_to_latest(&mut self) {
        let _ = self.out.flush();
    }
}

/// In-memory surface that keeps every rendered message.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct Transcript {
    pub entries: Vec<Message>,
    pub scrolls: usize,
}

#[cfg(test)]
impl Surface for Transcript {
    fn append(&mut self, message: &Message) {
        self.entries.push(message.clone());
    }

    fn scroll_to_latest(&mut self) {
        self.scrolls += 1;
    }
}
