use super::types::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::{
    Error,
    classify::{self, BusinessType},
    llm::GenerationClient,
    prompt,
};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn GenerationClient>,
    /// Resolved once at startup; the request path never reads the environment.
    pub api_key_configured: bool,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn to_response(e: Error) -> HandlerError {
    (
        e.status_code(),
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

/// POST handler for the generate route. Linear pipeline:
/// validate, classify, build prompts, call the API, map the result.
/// The first failing step short-circuits to its error response.
pub async fn generate(
    State(state): State<AppState>,
    request: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, HandlerError> {
    let request_id = Uuid::new_v4();

    let Json(request) = request.map_err(|rejection| {
        to_response(Error::invalid_input(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    })?;

    let Some(input) = request.input_text() else {
        return Err(to_response(Error::invalid_input(
            "Missing or invalid 'input' field",
        )));
    };

    if !state.api_key_configured {
        error!(%request_id, "Rejecting request: no API key configured");
        return Err(to_response(Error::config("GEMINI_API_KEY not set")));
    }

    let business_type = request
        .business_type_code()
        .and_then(BusinessType::from_code);
    let mode = classify::detect_mode(input, business_type);

    info!(
        %request_id,
        mode = mode.as_str(),
        input_len = input.len(),
        "Classified generate request"
    );

    let prompts = prompt::build(mode, input);

    match state
        .generator
        .generate(&prompts.system_prompt, &prompts.user_prompt)
        .await
    {
        Ok(output) => {
            info!(%request_id, output_len = output.len(), "Generation succeeded");
            Ok(Json(GenerateResponse { output }))
        }
        Err(e) => {
            error!(%request_id, "Generation failed: {}", e);
            Err(to_response(e))
        }
    }
}

/// Any non-POST method on the generate route.
pub async fn method_not_allowed() -> HandlerError {
    to_response(Error::MethodNotAllowed)
}
