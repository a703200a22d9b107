use serde::{Deserialize, Serialize};

/// Inbound body for the generate route. Both fields stay raw JSON so absent,
/// null and wrong-typed values can be told apart during validation instead of
/// failing deserialization.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub input: Option<serde_json::Value>,
    #[serde(default, rename = "businessType")]
    pub business_type: Option<serde_json::Value>,
}

impl GenerateRequest {
    /// The input text, when present, string-typed and non-empty.
    pub fn input_text(&self) -> Option<&str> {
        self.input
            .as_ref()
            .and_then(|value| value.as_str())
            .filter(|text| !text.is_empty())
    }

    /// The explicit business type code, when present and string-typed.
    /// Unknown codes are the caller's problem to ignore.
    pub fn business_type_code(&self) -> Option<&str> {
        self.business_type.as_ref().and_then(|value| value.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
