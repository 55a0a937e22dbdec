//! Protocol implementations.
//!
//! Each protocol has a handler driven by the server accept loop.
//!
//! - `echo`: WebSocket text echo with a bot-style reply

pub mod echo;
