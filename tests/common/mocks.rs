use async_trait::async_trait;
use blueprint_rust::{Error, Result, llm::GenerationClient};
use std::sync::Mutex;

/// Prompts recorded from one generate call.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub system_prompt: String,
    pub user_prompt: String,
}

/// Failure the mock should produce instead of a response.
#[derive(Debug, Clone)]
pub enum MockFailure {
    Upstream { status: u16, message: String },
    Internal(String),
}

/// Recording mock for the generation client seam.
#[derive(Debug, Default)]
pub struct MockGenerationClient {
    responses: Mutex<Vec<String>>,
    requests: Mutex<Vec<RecordedRequest>>,
    failure: Option<MockFailure>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, responses: Vec<&str>) -> Self {
        *self.responses.lock().unwrap() = responses.into_iter().map(String::from).collect();
        self
    }

    pub fn with_upstream_error(mut self, status: u16, message: &str) -> Self {
        self.failure = Some(MockFailure::Upstream {
            status,
            message: message.to_string(),
        });
        self
    }

    pub fn with_internal_error(mut self, message: &str) -> Self {
        self.failure = Some(MockFailure::Internal(message.to_string()));
        self
    }

    pub fn recorded_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationClient for MockGenerationClient {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.requests.lock().unwrap().push(RecordedRequest {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
        });

        match &self.failure {
            Some(MockFailure::Upstream { status, message }) => {
                Err(Error::upstream(*status, message.clone()))
            }
            Some(MockFailure::Internal(message)) => Err(Error::generation(message.clone())),
            None => {
                let mut responses = self.responses.lock().unwrap();
                if responses.is_empty() {
                    return Err(Error::generation("No more mock responses available"));
                }
                Ok(responses.remove(0))
            }
        }
    }
}
