//! Request validation — turns the raw `/analyze` body into an `AnalysisRequest`.
//!
//! Checks run in a fixed order: contract length, role, jurisdiction. A short
//! contract is therefore rejected regardless of the other fields.

use serde::Deserialize;

use crate::analysis::models::{AnalysisRequest, UserRole};
use crate::errors::AppError;

pub const MIN_CONTRACT_CHARS: usize = 50;
pub const MIN_COUNTRY_CHARS: usize = 2;

/// The `/analyze` body as it arrives on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAnalysisRequest {
    pub contract_text: String,
    #[serde(default = "default_role")]
    pub user_role: String,
    #[serde(default = "default_country")]
    pub country: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

fn default_role() -> String {
    UserRole::default().as_str().to_string()
}

fn default_country() -> String {
    "India".to_string()
}

pub fn validate_request(raw: RawAnalysisRequest) -> Result<AnalysisRequest, AppError> {
    let contract_text = raw.contract_text.trim();
    if contract_text.chars().count() < MIN_CONTRACT_CHARS {
        return Err(AppError::Validation(
            "Contract text too short. Please provide a complete contract.".to_string(),
        ));
    }

    let user_role = raw
        .user_role
        .parse::<UserRole>()
        .map_err(AppError::Validation)?;

    let country = normalize_jurisdiction(&raw.country).ok_or_else(|| {
        AppError::Validation("Country name must be at least 2 characters long".to_string())
    })?;

    Ok(AnalysisRequest {
        contract_text: contract_text.to_string(),
        user_role,
        country,
        user_id: raw.user_id,
    })
}

/// Trims and title-cases a jurisdiction name.
/// Returns `None` when fewer than two characters remain after trimming.
pub fn normalize_jurisdiction(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_COUNTRY_CHARS {
        return None;
    }
    Some(title_case(trimmed))
}

/// Upper-cases the first letter of every run of letters and lower-cases the rest.
/// Any non-letter ends a run, so "new-york" becomes "New-York".
///
/// A run opener whose uppercase form spans several chars keeps only the first
/// letter upper ("ßaar" becomes "Ssaar"). Runs are tracked on the emitted text,
/// so normalizing the output again leaves it unchanged.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if in_word || !c.is_alphabetic() {
            push_cased(&mut out, c, &mut in_word);
        } else {
            for u in c.to_uppercase() {
                push_cased(&mut out, u, &mut in_word);
            }
        }
    }
    out
}

/// Emits `c` as a run opener (as is) or run continuation (lower-cased).
fn push_cased(out: &mut String, c: char, in_word: &mut bool) {
    if !c.is_alphabetic() {
        out.push(c);
        *in_word = false;
    } else if *in_word {
        out.extend(c.to_lowercase());
        // İ lowers to "i" plus a combining dot, which ends the run.
        *in_word = out.chars().next_back().is_some_and(char::is_alphabetic);
    } else {
        out.push(c);
        *in_word = true;
    }
}
