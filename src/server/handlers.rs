// HTTP request handlers

use anyhow::{Context, Result};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderValue, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, CorsLayer};

use super::error::ApiError;
use super::types::{BotResponse, HealthStatus, UserInput};
use super::WellnessServer;
use crate::analysis::{parse_analysis, AnalysisError, AnalysisResult};
use crate::prompts::{analysis_prompt, CHAT_SYSTEM_INSTRUCTION};
use crate::providers::GenerationRequest;

/// Create the main application router
pub fn create_router(server: Arc<WellnessServer>) -> Result<Router> {
    let cors = cors_layer(&server.config().allowed_origins)?;

    Ok(Router::new()
        .route("/api/chat", post(handle_chat))
        .route("/api/analyze", post(handle_analyze))
        .route("/health", get(health_check))
        .with_state(server)
        .layer(cors))
}

/// CORS restricted to an exact list of origins
fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Handle POST /api/chat - conversational reply with crisis triage
///
/// The crisis check runs before the model is contacted, so a matched
/// message always gets its canned response even if the provider is down.
async fn handle_chat(
    State(server): State<Arc<WellnessServer>>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<BotResponse>, ApiError> {
    let Json(input) = payload?;
    let latest = input
        .history
        .last()
        .ok_or_else(|| ApiError::ClientInput("Chat history cannot be empty.".to_string()))?;

    let latest_text = latest
        .first_part()
        .ok_or_else(|| ApiError::ClientInput("Latest message has no text.".to_string()))?
        .to_lowercase();

    if let Some(found) = server.detector().detect(&latest_text) {
        tracing::info!(
            category = %found.category,
            turns = input.history.len(),
            "Returning emergency response"
        );
        return Ok(Json(BotResponse {
            reply: found.response.to_string(),
        }));
    }

    let turns = input.history.len();
    let request = GenerationRequest::from_history(input.history)
        .with_system_instruction(CHAT_SYSTEM_INSTRUCTION);

    let response = server
        .provider()
        .generate(&request)
        .await
        .map_err(|e| {
            ApiError::UpstreamService(format!("An error occurred with the AI service: {:#}", e))
        })?;

    tracing::info!(
        provider = %response.provider,
        model = %response.model,
        turns,
        "Forwarded conversation to model"
    );

    Ok(Json(BotResponse {
        reply: response.text,
    }))
}

/// Handle POST /api/analyze - structured analysis of a full transcript
async fn handle_analyze(
    State(server): State<Arc<WellnessServer>>,
    payload: Result<Json<UserInput>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(input) = payload?;
    let transcript = input
        .history
        .first()
        .and_then(|turn| turn.first_part())
        .ok_or_else(|| ApiError::ClientInput("Transcript cannot be empty.".to_string()))?;

    let normalized = server.normalizer().normalize(transcript);
    if normalized.is_empty() {
        tracing::info!("Transcript has no meaningful text, returning neutral analysis");
        return Ok(Json(AnalysisResult::neutral()));
    }

    let request = GenerationRequest::from_prompt(analysis_prompt(&normalized));

    let response = server
        .provider()
        .generate(&request)
        .await
        .map_err(|e| ApiError::UpstreamService(format!("An unexpected error occurred: {:#}", e)))?;

    let result = parse_analysis(&response.text).map_err(|e| match e {
        AnalysisError::InvalidJson(_) => {
            ApiError::UpstreamFormat("AI model returned an invalid JSON format.".to_string())
        }
        other => ApiError::UpstreamService(format!("An unexpected error occurred: {}", other)),
    })?;

    tracing::info!(
        urgency = ?result.urgency,
        topics = result.topics.len(),
        "Transcript analyzed"
    );

    Ok(Json(result))
}

/// Handle GET /health - Health check endpoint
pub async fn health_check(State(server): State<Arc<WellnessServer>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        provider: server.provider().name().to_string(),
        model: server.provider().default_model().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_rejects_invalid_origin() {
        assert!(cors_layer(&["http://localhost:3000".to_string()]).is_ok());
        assert!(cors_layer(&["bad\norigin".to_string()]).is_err());
    }
}
