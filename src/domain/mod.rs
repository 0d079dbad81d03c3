//! Domain layer containing the skill's types and rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared value objects and errors
//! - `skill` - Platform envelopes, intents, session attributes
//! - `conversation` - Context compression, prompt assembly, chat history

pub mod conversation;
pub mod foundation;
pub mod skill;
