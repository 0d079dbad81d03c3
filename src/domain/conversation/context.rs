//! Conversation context carried between turns.
//!
//! The context is the prior exchange the skill keeps in session attributes.
//! Before it is reused in a prompt it is collapsed to at most one user entry
//! and one assistant entry: every user turn is joined with spaces, and so is
//! every assistant turn. Turn order and interleaving are discarded.

use serde::{Deserialize, Serialize};

/// Role of a message in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User input.
    User,
    /// Completion reply.
    Assistant,
}

/// A message in the conversation context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextMessage {
    /// The role of the message sender.
    pub role: MessageRole,
    /// The content of the message.
    pub content: String,
}

impl ContextMessage {
    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }

    /// Builds the context stored after one completed exchange.
    pub fn exchange(query: impl Into<String>, reply: impl Into<String>) -> Vec<Self> {
        vec![Self::user(query), Self::assistant(reply)]
    }
}

/// Joins the content of every message with `role`, in order.
///
/// Returns `None` when no message has that role.
pub fn join_role(messages: &[ContextMessage], role: MessageRole) -> Option<String> {
    let parts: Vec<&str> = messages
        .iter()
        .filter(|m| m.role == role)
        .map(|m| m.content.as_str())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Collapses a context into at most one user and one assistant entry.
///
/// The user entry, when present, always comes first.
pub fn compress_context(messages: &[ContextMessage]) -> Vec<ContextMessage> {
    let mut compressed = Vec::with_capacity(2);

    if let Some(user) = join_role(messages, MessageRole::User) {
        compressed.push(ContextMessage::user(user));
    }
    if let Some(assistant) = join_role(messages, MessageRole::Assistant) {
        compressed.push(ContextMessage::assistant(assistant));
    }

    compressed
}
