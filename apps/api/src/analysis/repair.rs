//! Model output repair — parse, else strip a ```json fence and parse once more.
//!
//! Only the two top-level keys are checked. Clause shape is trusted and the
//! parsed value is returned untouched.

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

pub const REQUIRED_FIELDS: [&str; 2] = ["legal_safety_index", "clauses"];

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

#[derive(Debug, Error)]
pub enum RepairError {
    #[error("output is not valid JSON even after fence stripping: {0}")]
    Unparseable(#[source] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Runs the full pipeline on raw model text.
pub fn parse_model_output(raw: &str) -> Result<Value, RepairError> {
    let value = parse_json(raw)?;
    require_fields(&value)?;
    Ok(value)
}

/// Step 1 parses the trimmed text. Step 2 strips one fence and reparses.
fn parse_json(raw: &str) -> Result<Value, RepairError> {
    let trimmed = raw.trim();
    serde_json::from_str(trimmed).or_else(|e| {
        warn!("Model output is not plain JSON ({e}); stripping code fence");
        serde_json::from_str(strip_json_fence(trimmed)).map_err(RepairError::Unparseable)
    })
}

/// Removes at most one leading "```json" and one trailing "```", then trims.
pub fn strip_json_fence(text: &str) -> &str {
    let text = text.trim();
    let text = text.strip_prefix(FENCE_OPEN).unwrap_or(text);
    let text = text.strip_suffix(FENCE_CLOSE).unwrap_or(text);
    text.trim()
}

fn require_fields(value: &Value) -> Result<(), RepairError> {
    for field in REQUIRED_FIELDS {
        if value.get(field).is_none() {
            return Err(RepairError::MissingField(field));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
  "legal_safety_index": {"score": 72, "justification": "Mostly balanced."},
  "clauses": [
    {
      "clause_title": "1. Term",
      "original_text": "This agreement lasts 12 months.",
      "risk_level": "Low",
      "impact_first_explanation": "This means the deal ends after a year.",
      "safer_suggestion": "No suggestion needed. This clause is well-balanced under India law."
    }
  ]
}"#;

    #[test]
    fn test_plain_json_parses() {
        let value = parse_model_output(BODY).unwrap();
        assert_eq!(value["legal_safety_index"]["score"], 72);
    }

    #[test]
    fn test_fenced_json_equals_unwrapped() {
        let fenced = format!("```json\n{BODY}\n```");
        let repaired = parse_model_output(&fenced).unwrap();
        let direct: Value = serde_json::from_str(BODY).unwrap();
        assert_eq!(repaired, direct);
    }

    #[test]
    fn test_fence_with_surrounding_whitespace() {
        let fenced = format!("\n\n  ```json{BODY}```  \n");
        assert!(parse_model_output(&fenced).is_ok());
    }

    #[test]
    fn test_strip_only_one_fence_each_side() {
        assert_eq!(strip_json_fence("```json```json{}``````"), "```json{}```");
    }

    #[test]
    fn test_strip_is_noop_without_fence() {
        assert_eq!(strip_json_fence("  {\"a\": 1} "), "{\"a\": 1}");
    }

    #[test]
    fn test_bare_fence_is_not_repaired() {
        let fenced = format!("```\n{BODY}\n```");
        assert!(matches!(
            parse_model_output(&fenced),
            Err(RepairError::Unparseable(_))
        ));
    }

    #[test]
    fn test_prose_is_unparseable() {
        assert!(matches!(
            parse_model_output("Sure! Here is your analysis."),
            Err(RepairError::Unparseable(_))
        ));
    }

    #[test]
    fn test_missing_clauses_rejected() {
        let err = parse_model_output(r#"{"legal_safety_index": {"score": 10}}"#).unwrap_err();
        assert!(matches!(err, RepairError::MissingField("clauses")));
    }

    #[test]
    fn test_missing_safety_index_rejected() {
        let err = parse_model_output(r#"{"clauses": []}"#).unwrap_err();
        assert!(matches!(err, RepairError::MissingField("legal_safety_index")));
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(matches!(
            parse_model_output("[1, 2, 3]"),
            Err(RepairError::MissingField(_))
        ));
    }

    #[test]
    fn test_extra_fields_preserved() {
        let value =
            parse_model_output(r#"{"legal_safety_index": 5, "clauses": "odd", "note": "kept"}"#)
                .unwrap();
        assert_eq!(value["note"], "kept");
        assert_eq!(value["clauses"], "odd");
    }
}
