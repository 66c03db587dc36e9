//! Axum route handlers for the workload-adjustment API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::adjustment::models::{AdjustmentResult, MetricsInput};
use crate::adjustment::parser::parse_response;
use crate::adjustment::prompts::build_prompt;
use crate::errors::AppError;
use crate::state::AppState;

pub const CLIENT_NOT_READY: &str = "Cliente Gemini não inicializado. Verifique GEMINI_API_KEY.";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/ai/ajuste
///
/// Validates the metrics, asks the model for an assessment and parses the
/// answer. Once the input is valid the response is always 200: model failures
/// produce the fallback result with the failure in `rawText`.
pub async fn handle_adjust(
    State(state): State<AppState>,
    payload: Result<Json<MetricsInput>, JsonRejection>,
) -> Result<Json<AdjustmentResult>, AppError> {
    let Json(metrics) = payload?;
    metrics.validate()?;

    let request_id = Uuid::new_v4();

    let Some(generator) = state.generator.as_ref() else {
        warn!(%request_id, "Model client not configured, serving fallback result");
        return Ok(Json(AdjustmentResult::fallback(CLIENT_NOT_READY)));
    };

    let prompt = build_prompt(&metrics);

    match generator.generate(&prompt).await {
        Ok(text) => {
            let result = parse_response(&text);
            info!(
                %request_id,
                has_diagnosis = !result.diagnosis.is_empty(),
                has_load_adjustment = !result.load_adjustment.is_empty(),
                self_care_items = result.self_care.len(),
                has_day_plan = result.day_plan.is_some(),
                "Assessment parsed"
            );
            Ok(Json(result))
        }
        Err(e) => {
            error!(%request_id, "Model call failed: {e}");
            Ok(Json(AdjustmentResult::fallback(e.to_string())))
        }
    }
}

/// POST /api/ai/ajuste/parse
///
/// Runs the parser on caller-supplied text without calling the model.
/// Useful for checking how a given answer would be structured.
pub async fn handle_parse(
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<AdjustmentResult>, AppError> {
    let Json(request) = payload?;
    Ok(Json(parse_response(&request.text)))
}
