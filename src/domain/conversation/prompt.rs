//! Prompt assembly for the completion endpoint.

use super::context::{join_role, ContextMessage, MessageRole};

/// Fixed preamble opening every prompt.
pub const SYSTEM_PREAMBLE: &str = "You are a helpful assistant.\n";

/// Builds the single-string prompt sent to the completion endpoint.
///
/// Layout: the preamble, then `User: <prior user text>` and
/// `Assistant: <prior assistant text>` lines when the context has them,
/// then `User: <query>` with no trailing newline.
pub fn build_prompt(query: &str, context: &[ContextMessage]) -> String {
    let mut prompt = String::from(SYSTEM_PREAMBLE);

    if let Some(user) = join_role(context, MessageRole::User) {
        prompt.push_str("User: ");
        prompt.push_str(&user);
        prompt.push('\n');
    }
    if let Some(assistant) = join_role(context, MessageRole::Assistant) {
        prompt.push_str("Assistant: ");
        prompt.push_str(&assistant);
        prompt.push('\n');
    }

    prompt.push_str("User: ");
    prompt.push_str(query);
    prompt
}
