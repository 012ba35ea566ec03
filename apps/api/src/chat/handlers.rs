use axum::{extract::State, Json};
use chrono::Local;

use crate::chat::prompts::{system_prompt, Feature};
use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse};
use crate::safety::status::format_timestamp;
use crate::state::AppState;

/// POST /chat
/// Relays one user message to the completion provider under the system
/// prompt selected by the request's feature tag.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if req.groq_api_key.is_empty() {
        return Err(AppError::Validation("Groq API key is required".to_string()));
    }

    let feature = Feature::parse(&req.feature);
    let system = system_prompt(feature, Local::now());
    let response = state
        .llm
        .complete(&system, &req.history, &req.message, &req.groq_api_key)
        .await?;

    Ok(Json(ChatResponse {
        response,
        timestamp: format_timestamp(Local::now()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmClient;

    fn test_state() -> AppState {
        AppState {
            // Unroutable endpoint: an accidental upstream call fails fast.
            llm: LlmClient::with_api_url("http://127.0.0.1:1/chat/completions"),
        }
    }

    #[tokio::test]
    async fn test_chat_rejects_empty_api_key_before_any_upstream_call() {
        let req = ChatRequest {
            message: "is GEC Circle safe right now?".to_string(),
            history: vec![],
            feature: "assistant".to_string(),
            groq_api_key: String::new(),
        };

        let err = handle_chat(State(test_state()), Json(req))
            .await
            .err()
            .expect("empty key must be rejected");
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Groq API key is required"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }
}
