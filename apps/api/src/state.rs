use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no mutable data: every request works from its own payload plus the
/// static reference tables.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
