use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    SystemInstruction, UpstreamErrorBody,
};
use crate::{Result, config::LlmConfig, error::Error};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Seam between the request handler and the generation API, so handlers can
/// be exercised against a recording mock.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
    temperature: f32,
    max_output_tokens: u32,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        // The upstream defines no timeout of its own; bound it here
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
            model: config.model,
            api_key: config.api_key,
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            system_instruction: SystemInstruction {
                parts: vec![Part::text(system_prompt)],
            },
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part::text(user_prompt)],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        debug!(
            model = %self.model,
            system_len = system_prompt.len(),
            user_len = user_prompt.len(),
            "Sending generateContent request"
        );

        let response = self.client.post(self.api_url()).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            // The error shape is not guaranteed; read raw text first and
            // decode defensively
            let body = response.text().await.unwrap_or_default();
            let message = UpstreamErrorBody::decode(&body).into_message();
            return Err(Error::upstream(status.as_u16(), message));
        }

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| Error::generation(format!("Failed to parse generation response: {}", e)))?;

        debug!(
            candidates = api_response.candidates.len(),
            "Received generateContent response"
        );

        Ok(api_response.extract_text())
    }
}
