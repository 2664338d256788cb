//! Chat transcript
//!
//! The append-only message list a chat front end renders, plus the
//! quick-reply affordance that follows every bot message.

pub mod session;

pub use session::{ChatMessage, ChatSession, QuickReply, QuickReplyAction, Sender};
