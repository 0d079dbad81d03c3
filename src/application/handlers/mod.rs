//! Application handlers.
//!
//! Each submodule drives one entry point: the voice skill, the interactive
//! chat, and the one-shot question script. All of them reach the outside
//! world through ports.

pub mod chat;
pub mod completion;
pub mod query;
pub mod skill;
