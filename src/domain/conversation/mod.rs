//! Conversation domain module.
//!
//! Context carried between turns, its lossy compression, prompt assembly,
//! and the history owned by an interactive chat run.

mod context;
mod conversation;
mod prompt;

pub use context::{compress_context, join_role, ContextMessage, MessageRole};
pub use conversation::{ChatTurn, Conversation, ASSISTANT_ROLE_REPLY, USER_ROLE_REPLY};
pub use prompt::{build_prompt, SYSTEM_PREAMBLE};
