use axum::Json;
use chrono::Local;
use serde_json::{json, Value};

use crate::models::SafetyStatusResponse;
use crate::safety::reference::{contacts_json, CHITTAGONG_AREAS};
use crate::safety::status::safety_status_at;

/// GET /
/// Static capability listing for API discovery.
pub async fn handle_root() -> Json<Value> {
    Json(json!({
        "message": "HerSafe API - Women's Safety Assistant",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /chat": "General chat with AI assistant",
            "POST /route-safety": "Analyze route safety",
            "GET /safety-status": "Get current safety status",
            "GET /emergency-contacts": "Get emergency contact numbers"
        }
    }))
}

/// GET /safety-status
pub async fn handle_safety_status() -> Json<SafetyStatusResponse> {
    Json(safety_status_at(Local::now()))
}

/// GET /emergency-contacts
/// Returns the static reference tables verbatim, independent of time or input.
pub async fn handle_emergency_contacts() -> Json<Value> {
    Json(json!({
        "contacts": contacts_json(),
        "areas": CHITTAGONG_AREAS,
    }))
}
