use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /healthz
/// Reports the configured model and whether a client is available.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "model": state.config.gemini_model,
        "hasKey": state.config.has_api_key(),
        "clientReady": state.generator.is_some(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
