//! Echo reply formatting.

const REPLY_PREFIX: &str = "Bot reply: You said \"";
const REPLY_SUFFIX: &str = "\"";

/// Wrap a received payload in the bot reply.
///
/// The payload is embedded exactly as received: no trimming, escaping or
/// case folding.
pub fn format_reply(payload: &str) -> String {
    format!("{REPLY_PREFIX}{payload}{REPLY_SUFFIX}")
}
