//! Completion bridge handler.
//!
//! Assembles the prompt from a query and prior context and asks the
//! completion provider for a reply.

mod generate_response;

pub use generate_response::{
    error_reply, CompletionBridge, GenerationSettings, ERROR_REPLY_PREFIX,
};
