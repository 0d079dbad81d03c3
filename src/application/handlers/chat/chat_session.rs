//! One interactive chat run over the completion bridge.

use crate::application::handlers::completion::{error_reply, CompletionBridge};
use crate::domain::conversation::{ChatTurn, Conversation, ASSISTANT_ROLE_REPLY, USER_ROLE_REPLY};

/// Owns the conversation for as long as the chat loop runs.
pub struct ChatSession {
    conversation: Conversation,
    bridge: CompletionBridge,
}

impl ChatSession {
    pub fn new(bridge: CompletionBridge) -> Self {
        Self {
            conversation: Conversation::new(),
            bridge,
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Answers one line of input.
    ///
    /// Role commands reset the history. Anything else is sent with the prior
    /// history as context and, if the call succeeds, recorded.
    ///
    /// Prompt shape: the current query appears only as the final `User:` line,
    /// never inside the context lines, and a failed call records nothing.
    pub async fn respond(&mut self, input: &str) -> String {
        match ChatTurn::parse(input) {
            ChatTurn::SwitchToAssistant => {
                self.conversation.reset();
                ASSISTANT_ROLE_REPLY.to_string()
            }
            ChatTurn::SwitchToUser => {
                self.conversation.reset();
                USER_ROLE_REPLY.to_string()
            }
            ChatTurn::Ask(query) => {
                let context = self.conversation.context();
                let context = (!context.is_empty()).then_some(context.as_slice());

                match self.bridge.try_generate(&query, context).await {
                    Ok(reply) => {
                        self.conversation.record_exchange(query, reply.clone());
                        reply
                    }
                    Err(err) => error_reply(&err),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::adapters::ai::MockCompletionProvider;
    use crate::application::handlers::completion::GenerationSettings;
    use crate::ports::CompletionError;

    fn session(provider: &MockCompletionProvider) -> ChatSession {
        ChatSession::new(CompletionBridge::new(
            Arc::new(provider.clone()),
            GenerationSettings::default(),
        ))
    }

    #[tokio::test]
    async fn history_grows_with_each_answer() {
        let provider = MockCompletionProvider::new()
            .with_response("Paris")
            .with_response("About two million");
        let mut chat = session(&provider);

        assert_eq!(chat.respond("Capital of France?").await, "Paris");
        assert_eq!(chat.respond("Population?").await, "About two million");

        let prompts = provider.prompts();
        assert_eq!(prompts[0], "You are a helpful assistant.\nUser: Capital of France?");
        assert_eq!(
            prompts[1],
            "You are a helpful assistant.\nUser: Capital of France?\nAssistant: Paris\nUser: Population?"
        );
        assert_eq!(chat.conversation().user_messages().len(), 2);
        assert_eq!(chat.conversation().assistant_messages().len(), 2);
    }

    #[tokio::test]
    async fn role_switch_resets_history() {
        let provider = MockCompletionProvider::new().with_response("hi");
        let mut chat = session(&provider);
        chat.respond("hello").await;

        let reply = chat.respond("Change role to assistant").await;

        assert_eq!(reply, ASSISTANT_ROLE_REPLY);
        assert!(chat.conversation().is_empty());
        assert_eq!(chat.respond("change role to user").await, USER_ROLE_REPLY);
        assert_eq!(provider.call_count(), 1);
    }

    #[tokio::test]
    async fn failure_is_reported_and_not_recorded() {
        let provider = MockCompletionProvider::new().with_error(CompletionError::MissingCredentials);
        let mut chat = session(&provider);

        let reply = chat.respond("hello").await;

        assert_eq!(reply, "Error generating response: no API key configured");
        assert!(chat.conversation().is_empty());
    }
}
