//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - completion providers (OpenAI-compatible HTTP, mock)
//! - `http` - the skill endpoint served to the voice platform
//! - `query` - the form-posting question client

pub mod ai;
pub mod http;
pub mod query;

pub use ai::{MockCompletionProvider, OpenAIConfig, OpenAIProvider};
pub use query::FormQuestionClient;
