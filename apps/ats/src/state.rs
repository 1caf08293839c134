use std::sync::Arc;

use crate::llm_client::ModelClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model client. Production: GeminiClient.
    pub llm: Arc<dyn ModelClient>,
}
