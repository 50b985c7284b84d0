//! Contract analysis — runs one request through the pipeline.
//!
//! Flow: validated request → build_prompt → TextGenerator::generate →
//!       parse_model_output → outcome. One pass, no retries.

use tracing::{info, warn};

use crate::analysis::mock::canned_analysis;
use crate::analysis::models::{AnalysisOutcome, AnalysisRequest};
use crate::analysis::prompts::build_prompt;
use crate::analysis::repair::parse_model_output;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;

/// Analyzes a validated request.
///
/// With no generator configured, returns the canned example analysis.
pub async fn analyze_contract(
    llm: Option<&dyn TextGenerator>,
    request: &AnalysisRequest,
) -> Result<AnalysisOutcome, AppError> {
    info!(
        "Contract analysis requested for role: {} in country: {}",
        request.user_role, request.country
    );

    let prompt = build_prompt(request);

    let Some(llm) = llm else {
        warn!("Gemini AI not available, returning mock data");
        return Ok(AnalysisOutcome::Canned(canned_analysis()));
    };

    let raw = llm.generate(&prompt).await?;
    // GeminiClient already rejects blank text; this covers any other TextGenerator.
    if raw.trim().is_empty() {
        return Err(AppError::UpstreamEmpty);
    }

    let value = parse_model_output(&raw)?;

    info!("Contract analysis completed successfully (model: {})", llm.model());
    Ok(AnalysisOutcome::Model(value))
}
