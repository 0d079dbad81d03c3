//! Mock Completion Provider for testing.
//!
//! Provides a configurable mock implementation of the CompletionProvider
//! port, allowing tests to run without calling real APIs.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockCompletionProvider::new()
//!     .with_response("  4  ")
//!     .with_error(CompletionError::AuthenticationFailed);
//!
//! let response = provider.complete(request).await?;
//! assert_eq!(response.text, "  4  ");
//! assert_eq!(provider.prompts(), vec![request.prompt]);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    CompletionError, CompletionProvider, CompletionRequest, CompletionResponse, ProviderInfo,
};

/// Mock completion provider for testing.
///
/// Responses are consumed in order; once the queue is empty every call
/// returns `"Mock response"`. Clones share the queue and call history.
#[derive(Debug, Clone)]
pub struct MockCompletionProvider {
    responses: Arc<Mutex<VecDeque<Result<String, CompletionError>>>>,
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl Default for MockCompletionProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCompletionProvider {
    /// Creates a new mock provider with an empty queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.lock_responses().push_back(Ok(text.into()));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: CompletionError) -> Self {
        self.lock_responses().push_back(Err(error));
        self
    }

    /// Returns the number of calls made to this provider.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Returns all recorded requests.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.lock_calls().clone()
    }

    /// Returns the prompt of every recorded request.
    pub fn prompts(&self) -> Vec<String> {
        self.lock_calls().iter().map(|c| c.prompt.clone()).collect()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String, CompletionError>>> {
        self.responses.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<CompletionRequest>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, CompletionError> {
        self.lock_calls().push(request);

        let next = self
            .lock_responses()
            .pop_front()
            .unwrap_or_else(|| Ok("Mock response".to_string()));

        next.map(|text| CompletionResponse::new(text, "mock-model"))
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-model")
    }
}
