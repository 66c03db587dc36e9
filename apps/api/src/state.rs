use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured or the client failed to build;
    /// assessments then return the fallback result.
    pub generator: Option<Arc<dyn TextGenerator>>,
    pub config: Config,
}
