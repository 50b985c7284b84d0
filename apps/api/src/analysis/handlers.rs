//! Axum route handlers for the analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::analysis::analyzer::analyze_contract;
use crate::analysis::models::AnalysisOutcome;
use crate::analysis::validation::{validate_request, RawAnalysisRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /analyze
///
/// Validates the body, asks the model for an analysis and relays its JSON.
/// Malformed bodies are reported as 400 with the extractor's message.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<RawAnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let Json(raw) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let request = validate_request(raw)?;

    let outcome = analyze_contract(state.llm.as_deref(), &request).await?;
    Ok(Json(outcome))
}
