//! Echo protocol implementation.
//!
//! A WebSocket text chat where the server plays a bot that repeats the user:
//! - Client sends: a text frame carrying any payload
//! - Server replies: a text frame `Bot reply: You said "<payload>"`
//!
//! ## Protocol Format
//!
//! Plain text frames, no sub-protocol and no structured encoding. Each
//! frame is one opaque payload in both directions.
//!
//! ```text
//! Request:  hello
//! Response: Bot reply: You said "hello"
//! ```
//!
//! Replies go only to the connection the payload arrived on. Connections
//! share nothing, so there is no fan-out and no ordering across clients.
//! Binary frames are decoded as lossy UTF-8 and answered as text. A close
//! frame, end of stream and transport error all end the connection the
//! same way.

pub mod handler;
pub mod reply;

pub use handler::handle_connection;
pub use reply::format_reply;
