//! Form-post question client.

use async_trait::async_trait;
use reqwest::Client;

use crate::ports::{QueryError, QuestionClient};

/// Form field carrying the question text.
pub const QUESTION_FIELD: &str = "question";

/// Posts `question=<text>` to a fixed URL and returns the body unparsed.
pub struct FormQuestionClient {
    url: String,
    client: Client,
}

impl FormQuestionClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl QuestionClient for FormQuestionClient {
    async fn post_question(&self, question: &str) -> Result<String, QueryError> {
        let response = self
            .client
            .post(&self.url)
            .form(&[(QUESTION_FIELD, question)])
            .send()
            .await
            .map_err(|e| QueryError::Request(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| QueryError::Request(e.to_string()))
    }
}
