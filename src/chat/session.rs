//! Chat session storage
//!
//! Stores the messages of one chat window with timestamps. Classification
//! sees only the current input; nothing from earlier turns is carried over.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::classifier::IntentClassifier;
use crate::models::ClassificationResult;
use crate::normalizer::is_space;
use crate::replies::{QUICK_REPLY_LABEL, WELCOME_MESSAGE};

/// Who sent a message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// What the quick-reply button does when pressed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuickReplyAction {
    StartOrder,
}

/// Quick-reply button shown under the latest bot message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuickReply {
    pub label: String,
    pub action: QuickReplyAction,
}

impl QuickReply {
    pub fn start_order() -> Self {
        Self {
            label: QUICK_REPLY_LABEL.to_string(),
            action: QuickReplyAction::StartOrder,
        }
    }
}

/// A single message in the transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub sender: Sender,
    pub text: String,
    pub show_quick_reply: bool,
}

impl ChatMessage {
    pub fn user(text: String) -> Self {
        Self {
            message_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            sender: Sender::User,
            text,
            show_quick_reply: false,
        }
    }

    /// Bot messages always offer the quick reply
    pub fn bot(text: String) -> Self {
        Self {
            message_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            sender: Sender::Bot,
            text,
            show_quick_reply: true,
        }
    }
}

/// One chat window's transcript
pub struct ChatSession {
    classifier: IntentClassifier,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Start a session with the built-in catalog
    pub fn new() -> Self {
        Self::with_classifier(IntentClassifier::builtin())
    }

    /// Start a session; the transcript opens with the welcome message
    pub fn with_classifier(classifier: IntentClassifier) -> Self {
        Self {
            classifier,
            messages: vec![ChatMessage::bot(WELCOME_MESSAGE.to_string())],
        }
    }

    /// Submit user input.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the trimmed
    /// text and the bot reply are appended, in that order.
    pub fn send(&mut self, input: &str) -> Option<ClassificationResult> {
        let trimmed = input.trim_matches(is_space);
        if trimmed.is_empty() {
            return None;
        }

        let result = self.classifier.classify(trimmed);

        self.messages.push(ChatMessage::user(trimmed.to_string()));
        self.messages.push(ChatMessage::bot(result.reply.clone()));

        Some(result)
    }

    /// Iterate over all messages in arrival order
    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn last_message(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// True when the newest message is a bot message carrying the flag
    pub fn should_show_quick_reply(&self) -> bool {
        self.last_message()
            .map(|m| m.sender == Sender::Bot && m.show_quick_reply)
            .unwrap_or(false)
    }

    /// The quick reply to render, if any
    pub fn quick_reply(&self) -> Option<QuickReply> {
        self.should_show_quick_reply().then(QuickReply::start_order)
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Intent;
    use crate::replies::reply_for;

    #[test]
    fn test_starts_with_welcome() {
        let session = ChatSession::new();

        assert_eq!(session.message_count(), 1);
        let first = session.last_message().unwrap();
        assert_eq!(first.sender, Sender::Bot);
        assert_eq!(first.text, WELCOME_MESSAGE);
        assert!(session.should_show_quick_reply());
    }

    #[test]
    fn test_send_appends_user_then_bot() {
        let mut session = ChatSession::new();
        let result = session.send("  ซื้อ 1 แถม 1  ").unwrap();

        assert_eq!(result.intent, Intent::PromoB1g1);
        assert_eq!(session.message_count(), 3);

        let messages: Vec<&ChatMessage> = session.messages().collect();
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].text, "ซื้อ 1 แถม 1");
        assert!(!messages[1].show_quick_reply);
        assert_eq!(messages[2].sender, Sender::Bot);
        assert_eq!(messages[2].text, reply_for(Intent::PromoB1g1));
        assert!(messages[2].show_quick_reply);
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut session = ChatSession::new();

        assert!(session.send("").is_none());
        assert!(session.send("   \n").is_none());
        assert!(session.send("\u{FEFF}").is_none());
        assert!(session.send(" \u{FEFF}\u{3000} ").is_none());
        assert_eq!(session.message_count(), 1);
    }

    #[test]
    fn test_unknown_still_replies() {
        let mut session = ChatSession::new();
        let result = session.send("asdkjaslkdj").unwrap();

        assert_eq!(result.intent, Intent::Unknown);
        assert_eq!(session.last_message().unwrap().text, reply_for(Intent::Unknown));
        assert_eq!(session.quick_reply(), Some(QuickReply::start_order()));
    }

    #[test]
    fn test_no_context_between_turns() {
        let mut session = ChatSession::new();
        session.send("ซื้อ 1 แถม 1");
        let second = session.send("asdkjaslkdj").unwrap();

        assert_eq!(second.intent, Intent::Unknown);
    }

    #[test]
    fn test_message_ids_unique_and_ordered() {
        let mut session = ChatSession::new();
        session.send("hello");
        session.send("menu");

        let messages: Vec<&ChatMessage> = session.messages().collect();
        let ids: std::collections::HashSet<Uuid> = messages.iter().map(|m| m.message_id).collect();
        assert_eq!(ids.len(), messages.len());

        for pair in messages.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn test_quick_reply_hidden_after_user_message() {
        let mut session = ChatSession::new();
        session.messages.push(ChatMessage::user("typing".to_string()));

        assert!(!session.should_show_quick_reply());
        assert_eq!(session.quick_reply(), None);
    }

    #[test]
    fn test_quick_reply_wire_format() {
        let value = serde_json::to_value(QuickReply::start_order()).unwrap();
        assert_eq!(value["label"], "สั่งเลย!");
        assert_eq!(value["action"], "start_order");
    }
}
