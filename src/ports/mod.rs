//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `CompletionProvider` - Text-completion API used by the completion bridge
//! - `QuestionClient` - Web endpoint used by the standalone question script

mod completion_provider;
mod question_client;

pub use completion_provider::{
    CompletionError, CompletionProvider, CompletionRequest, CompletionResponse, FinishReason,
    ProviderInfo, TokenUsage,
};
pub use question_client::{QueryError, QuestionClient};
