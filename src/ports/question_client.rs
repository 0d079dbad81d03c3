//! Question Client Port - posts a question to a web endpoint.

use async_trait::async_trait;

/// Port for endpoints that take a question and answer with a raw body.
#[async_trait]
pub trait QuestionClient: Send + Sync {
    /// Posts the question and returns the response body as-is.
    async fn post_question(&self, question: &str) -> Result<String, QueryError>;
}

/// Errors from posting a question.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Transport failure.
    #[error("request failed: {0}")]
    Request(String),

    /// Reading the question from the terminal failed.
    #[error("input error: {0}")]
    Input(#[from] std::io::Error),
}
