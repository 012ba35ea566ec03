use serde::{Deserialize, Serialize};

/// A single turn in a conversation. `role` is forwarded to the provider
/// verbatim and deliberately unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// POST /chat request body.
/// No Debug impl on purpose: the struct carries the caller's API key.
#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
    #[serde(default = "default_feature")]
    pub feature: String,
    pub groq_api_key: String,
}

fn default_feature() -> String {
    "assistant".to_string()
}

/// POST /route-safety request body. Carries the caller's API key, no Debug.
#[derive(Deserialize)]
pub struct RouteRequest {
    pub start_location: String,
    pub end_location: String,
    pub groq_api_key: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub analysis: String,
    pub maps_link: String,
    pub safety_status: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct SafetyStatusResponse {
    pub status: String,
    pub color: String,
    pub advice: String,
    pub timestamp: String,
}
