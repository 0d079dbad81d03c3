//! Conversation - history owned by one interactive chat run.
//!
//! The terminal chat loop keeps every user and assistant turn for as long as
//! it runs. The history lives here rather than in process-wide state, and is
//! dropped with the conversation.

use uuid::Uuid;

use super::context::ContextMessage;

/// Reply spoken when the user asks to switch to the assistant role.
pub const ASSISTANT_ROLE_REPLY: &str = "You are now the helpful assistant.";

/// Reply spoken when the user asks to switch to the user role.
pub const USER_ROLE_REPLY: &str = "You are now the user.";

/// What a line of chat input asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatTurn {
    /// Reset history and take the assistant role.
    SwitchToAssistant,
    /// Reset history and take the user role.
    SwitchToUser,
    /// Ask the completion endpoint.
    Ask(String),
}

impl ChatTurn {
    /// Classifies one line of input. Role commands match case-insensitively
    /// anywhere in the line.
    pub fn parse(input: &str) -> Self {
        let lowered = input.to_lowercase();
        if lowered.contains("change role to assistant") {
            ChatTurn::SwitchToAssistant
        } else if lowered.contains("change role to user") {
            ChatTurn::SwitchToUser
        } else {
            ChatTurn::Ask(input.to_string())
        }
    }
}

/// History of one chat run.
#[derive(Debug, Clone)]
pub struct Conversation {
    id: Uuid,
    user_messages: Vec<String>,
    assistant_messages: Vec<String>,
}

impl Conversation {
    /// Starts an empty conversation.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            user_messages: Vec::new(),
            assistant_messages: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user_messages(&self) -> &[String] {
        &self.user_messages
    }

    pub fn assistant_messages(&self) -> &[String] {
        &self.assistant_messages
    }

    pub fn is_empty(&self) -> bool {
        self.user_messages.is_empty() && self.assistant_messages.is_empty()
    }

    /// Forgets every recorded turn.
    pub fn reset(&mut self) {
        self.user_messages.clear();
        self.assistant_messages.clear();
    }

    /// Records a completed exchange.
    pub fn record_exchange(&mut self, query: impl Into<String>, reply: impl Into<String>) {
        self.user_messages.push(query.into());
        self.assistant_messages.push(reply.into());
    }

    /// History as context: all user turns, then all assistant turns.
    pub fn context(&self) -> Vec<ContextMessage> {
        self.user_messages
            .iter()
            .map(ContextMessage::user)
            .chain(self.assistant_messages.iter().map(ContextMessage::assistant))
            .collect()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
