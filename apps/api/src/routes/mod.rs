pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::chat::handlers::handle_chat;
use crate::route_safety::handlers::handle_route_safety;
use crate::safety::handlers::{handle_emergency_contacts, handle_root, handle_safety_status};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(health::health_handler))
        .route("/safety-status", get(handle_safety_status))
        .route("/emergency-contacts", get(handle_emergency_contacts))
        .route("/chat", post(handle_chat))
        .route("/route-safety", post(handle_route_safety))
        .with_state(state)
}
