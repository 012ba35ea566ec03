use axum::Json;
use chrono::Local;
use serde_json::{json, Value};

/// GET /health
/// Liveness probe with an RFC 3339 timestamp.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": Local::now().to_rfc3339(),
    }))
}
