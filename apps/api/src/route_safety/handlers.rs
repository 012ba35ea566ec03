use axum::{extract::State, Json};
use chrono::{DateTime, Local};

use crate::chat::prompts::{system_prompt, Feature};
use crate::errors::AppError;
use crate::models::{RouteRequest, RouteResponse};
use crate::route_safety::maps::maps_link;
use crate::safety::status::{format_timestamp, safety_status_at};
use crate::state::AppState;

/// POST /route-safety
/// Combines the time-based status, an AI route analysis, and a walking
/// directions link into one report.
pub async fn handle_route_safety(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    if req.start_location.is_empty() || req.end_location.is_empty() {
        return Err(AppError::Validation(
            "Both start and end locations are required".to_string(),
        ));
    }
    if req.groq_api_key.is_empty() {
        return Err(AppError::Validation("Groq API key is required".to_string()));
    }

    let now = Local::now();
    let status = safety_status_at(now);

    let prompt = analysis_prompt(&req.start_location, &req.end_location, now);
    let system = system_prompt(Feature::Route, now);
    let ai_response = state
        .llm
        .complete(&system, &[], &prompt, &req.groq_api_key)
        .await?;

    let maps_link = maps_link(&req.start_location, &req.end_location);

    let analysis = format!(
        "Route Analysis: {} → {}\n\
         Current Time: {}\n\
         Safety Status: {}\n\
         General Advice: {}\n\
         \n\
         AI Route Analysis:\n\
         {}",
        req.start_location,
        req.end_location,
        format_timestamp(now),
        status.status,
        status.advice,
        ai_response,
    );

    Ok(Json(RouteResponse {
        analysis,
        maps_link,
        safety_status: status.status,
        timestamp: status.timestamp,
    }))
}

/// The five-point analysis request sent to the model for a route.
fn analysis_prompt(start: &str, end: &str, now: DateTime<Local>) -> String {
    format!(
        "Analyze the safety of this route in Chittagong:\n\
         From: {start}\n\
         To: {end}\n\
         Current time: {}\n\
         Provide:\n\
         1. Safety assessment for this specific route\n\
         2. Areas to be cautious about\n\
         3. Best path recommendations\n\
         4. Time-specific advice\n\
         5. Alternative routes if safer",
        now.format("%I:%M %p"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmClient;
    use chrono::TimeZone;

    fn test_state() -> AppState {
        AppState {
            llm: LlmClient::with_api_url("http://127.0.0.1:1/chat/completions"),
        }
    }

    #[tokio::test]
    async fn test_missing_start_location_is_rejected() {
        let req = RouteRequest {
            start_location: String::new(),
            end_location: "GEC Circle".to_string(),
            groq_api_key: "gsk_test".to_string(),
        };

        let err = handle_route_safety(State(test_state()), Json(req))
            .await
            .err()
            .expect("empty start must be rejected");
        match err {
            AppError::Validation(msg) => {
                assert_eq!(msg, "Both start and end locations are required")
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_end_location_is_rejected() {
        let req = RouteRequest {
            start_location: "New Market".to_string(),
            end_location: String::new(),
            groq_api_key: "gsk_test".to_string(),
        };

        let err = handle_route_safety(State(test_state()), Json(req))
            .await
            .err()
            .expect("empty end must be rejected");
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_missing_api_key_is_rejected_after_location_check() {
        let req = RouteRequest {
            start_location: "New Market".to_string(),
            end_location: "GEC Circle".to_string(),
            groq_api_key: String::new(),
        };

        let err = handle_route_safety(State(test_state()), Json(req))
            .await
            .err()
            .expect("empty key must be rejected");
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Groq API key is required"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_analysis_prompt_embeds_route_and_requested_structure() {
        let now = Local.with_ymd_and_hms(2025, 6, 15, 21, 5, 0).unwrap();
        let prompt = analysis_prompt("New Market", "GEC Circle", now);
        assert!(prompt.contains("From: New Market"));
        assert!(prompt.contains("To: GEC Circle"));
        assert!(prompt.contains("Current time: 09:05 PM"));
        assert!(prompt.contains("1. Safety assessment for this specific route"));
        assert!(prompt.contains("5. Alternative routes if safer"));
    }
}
