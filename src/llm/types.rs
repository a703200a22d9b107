//! Wire types for the generative-language API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: SystemInstruction,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// A single content part. Only text parts are produced or consumed here;
/// anything else deserializes with `text: None` and is skipped on extraction.
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts, trimmed. Zero
    /// candidates or zero text parts yield an empty string, which is a valid
    /// result rather than an error.
    pub fn extract_text(&self) -> String {
        let Some(candidate) = self.candidates.first() else {
            return String::new();
        };
        let Some(content) = &candidate.content else {
            return String::new();
        };
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        text.trim().to_string()
    }
}

/// Error shape the API uses for non-success statuses.
#[derive(Debug, Deserialize)]
pub struct GeminiErrorResponse {
    pub error: GeminiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct GeminiErrorDetail {
    pub message: String,
}

/// Best-effort decode of an upstream error body: structured when the body
/// matches the documented error shape, raw text otherwise.
#[derive(Debug, PartialEq, Eq)]
pub enum UpstreamErrorBody {
    Structured(String),
    Raw(String),
}

impl UpstreamErrorBody {
    pub fn decode(body: &str) -> Self {
        match serde_json::from_str::<GeminiErrorResponse>(body) {
            Ok(parsed) => Self::Structured(parsed.error.message),
            Err(_) => Self::Raw(body.to_string()),
        }
    }

    pub fn into_message(self) -> String {
        match self {
            Self::Structured(message) => message,
            Self::Raw(raw) if raw.trim().is_empty() => {
                "Generation API returned an error with an empty body".to_string()
            }
            Self::Raw(raw) => raw,
        }
    }
}
