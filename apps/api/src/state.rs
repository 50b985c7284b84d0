use std::sync::Arc;

use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup. `None` when no Gemini key is configured,
    /// in which case `/analyze` serves the canned example analysis.
    pub llm: Option<Arc<dyn TextGenerator>>,
}
