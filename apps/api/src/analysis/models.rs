use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The business role the analysis is written for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Freelancer,
    Client,
    Startup,
    Vendor,
    Legal,
}

impl UserRole {
    pub const ALL: [UserRole; 6] = [
        UserRole::Student,
        UserRole::Freelancer,
        UserRole::Client,
        UserRole::Startup,
        UserRole::Vendor,
        UserRole::Legal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Freelancer => "freelancer",
            UserRole::Client => "client",
            UserRole::Startup => "startup",
            UserRole::Vendor => "vendor",
            UserRole::Legal => "legal",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    /// Exact, case-sensitive match against the six role names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserRole::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = UserRole::ALL.iter().map(|r| r.as_str()).collect();
                format!("Invalid user role. Must be one of: {}", names.join(", "))
            })
    }
}

/// A request that has passed validation. Built only by `validation::validate_request`.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Already trimmed.
    pub contract_text: String,
    pub user_role: UserRole,
    /// Trimmed and title-cased.
    pub country: String,
    // Accepted for client compatibility; never logged or forwarded.
    #[allow(dead_code)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyIndex {
    /// 0 (extremely risky) to 100 (very safe).
    pub score: u8,
    pub justification: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClauseFinding {
    pub clause_title: String,
    pub original_text: String,
    pub risk_level: RiskLevel,
    pub impact_first_explanation: String,
    pub safer_suggestion: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub legal_safety_index: SafetyIndex,
    pub clauses: Vec<ClauseFinding>,
}

/// What `/analyze` returns on success.
///
/// Model output is relayed as parsed, without coercion into `AnalysisResult`;
/// only the canned fallback is typed.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisOutcome {
    Canned(AnalysisResult),
    Model(Value),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_round_trips_through_from_str() {
        for role in UserRole::ALL {
            assert_eq!(role.as_str().parse::<UserRole>(), Ok(role));
        }
    }

    #[test]
    fn test_user_role_rejects_unknown_and_wrong_case() {
        let err = "lawyer".parse::<UserRole>().unwrap_err();
        assert_eq!(
            err,
            "Invalid user role. Must be one of: student, freelancer, client, startup, vendor, legal"
        );
        assert!("Student".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_user_role_default_is_student() {
        assert_eq!(UserRole::default(), UserRole::Student);
    }

    #[test]
    fn test_risk_level_serializes_capitalized() {
        assert_eq!(serde_json::to_string(&RiskLevel::None).unwrap(), "\"None\"");
        assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"High\"");
    }

    #[test]
    fn test_model_outcome_serializes_value_unchanged() {
        let value = serde_json::json!({
            "legal_safety_index": {"score": 80, "justification": "ok"},
            "clauses": [],
            "extra": true
        });
        let out = serde_json::to_value(AnalysisOutcome::Model(value.clone())).unwrap();
        assert_eq!(out, value);
    }
}
