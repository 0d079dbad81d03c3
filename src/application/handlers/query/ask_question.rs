//! One-shot question against a web endpoint.

use std::sync::Arc;
use std::time::Duration;

use crate::ports::{QueryError, QuestionClient};

/// Posts a question, waits a fixed delay, and returns the raw body.
pub struct AskQuestionHandler {
    client: Arc<dyn QuestionClient>,
    delay: Duration,
}

impl AskQuestionHandler {
    pub fn new(client: Arc<dyn QuestionClient>, delay: Duration) -> Self {
        Self { client, delay }
    }

    pub async fn handle(&self, question: &str) -> Result<String, QueryError> {
        let body = self.client.post_question(question).await?;
        tracing::debug!(bytes = body.len(), delay_ms = self.delay.as_millis() as u64, "answer received");

        // The endpoint may still be producing the answer.
        tokio::time::sleep(self.delay).await;
        Ok(body)
    }
}
