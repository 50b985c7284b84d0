//! Canned analysis returned when no Gemini key is configured.

use crate::analysis::models::{AnalysisResult, ClauseFinding, RiskLevel, SafetyIndex};

pub fn canned_analysis() -> AnalysisResult {
    AnalysisResult {
        legal_safety_index: SafetyIndex {
            score: 45,
            justification: "Several high-risk clauses including unlimited liability and unclear payment terms. Immediate legal review recommended.".to_string(),
        },
        clauses: vec![
            ClauseFinding {
                clause_title: "1. Payment Terms".to_string(),
                original_text: "Payment shall be made within 90 days of invoice date. Late fees of 5% per month apply.".to_string(),
                risk_level: RiskLevel::High,
                impact_first_explanation: "This means you won't get paid for 3 months after completing work, and if they're even later, you'll face hefty penalties that could exceed your project fee.".to_string(),
                safer_suggestion: "Payment shall be made within 30 days of invoice date. Late fees of 1.5% per month shall apply to Client for overdue payments.".to_string(),
            },
            ClauseFinding {
                clause_title: "2. Liability Clause".to_string(),
                original_text: "Contractor assumes full liability for any damages arising from this agreement.".to_string(),
                risk_level: RiskLevel::High,
                impact_first_explanation: "This means if anything goes wrong (even beyond your control), you're personally responsible for all costs and damages, which could bankrupt your business.".to_string(),
                safer_suggestion: "Contractor's liability shall be limited to the total contract value. Both parties shall maintain appropriate professional indemnity insurance.".to_string(),
            },
            ClauseFinding {
                clause_title: "3. Intellectual Property".to_string(),
                original_text: "All work product and intellectual property created shall belong to the Client.".to_string(),
                risk_level: RiskLevel::Medium,
                impact_first_explanation: "This means you can't reuse any code, designs, or methods you create for this project in future work, limiting your ability to build on your expertise.".to_string(),
                safer_suggestion: "Client receives exclusive license to use work product. Contractor retains rights to general methodologies and pre-existing intellectual property.".to_string(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canned_analysis_shape() {
        let result = canned_analysis();
        assert_eq!(result.legal_safety_index.score, 45);
        assert_eq!(result.clauses.len(), 3);
        assert_eq!(result.clauses[2].risk_level, RiskLevel::Medium);
    }
}
