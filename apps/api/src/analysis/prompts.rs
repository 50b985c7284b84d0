// Contract analysis prompt template and the static context tables fed into it.

use crate::analysis::models::{AnalysisRequest, UserRole};

/// Master analysis prompt.
/// Replace: {user_role}, {country}, {role_context}, {country_context}, {contract_text}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"
**SYSTEM PROMPT:**
You are "Lexi-Guide," an expert AI legal analyst specialized in Indian contract law for Micro, Small, and Medium Enterprises (MSMEs). Your mission is to help non-lawyers understand legal documents by identifying risks, simplifying complex language, and providing actionable, safer alternatives. You are empathetic, clear, and your tone is that of a trustworthy mentor.

**USER PROMPT:**
Analyze the following legal document for a user who is a **{user_role}** in **{country}**.

**Role-Specific Context:**
{role_context}

**Country-Specific Legal Context:**
{country_context}

**Contract Text:**
```
{contract_text}
```

**Instructions:**
Respond ONLY with a valid JSON object. Do not include any text, markdown formatting, or explanations before or after the JSON. The JSON object must have the following structure:

{
  "legal_safety_index": {
    "score": <An integer from 0 (extremely risky) to 100 (very safe)>,
    "justification": "A brief, 1-2 sentence explanation for the score, mentioning the 2-3 biggest risk factors for a {user_role} in {country}."
  },
  "clauses": [
    {
      "clause_title": "<The title or a short, descriptive summary of the clause, e.g., '5. Payment Terms'>",
      "original_text": "<The exact text of the clause from the document>",
      "risk_level": "<'High', 'Medium', 'Low', or 'None'>",
      "impact_first_explanation": "Explain what this means for the {user_role} in {country}, in simple terms. Start with 'This means...'. Use local legal context where relevant.",
      "safer_suggestion": "<If risk is High or Medium, suggest a concrete, well-worded alternative clause that reduces the {user_role}'s risk under {country} law. If risk is Low or None, state 'No suggestion needed. This clause is well-balanced under {country} law.'>"
    }
  ]
}
"#;

/// Guidance injected for each role.
pub fn role_context(role: UserRole) -> &'static str {
    match role {
        UserRole::Student => "As a student, focus on learning-oriented contracts like internships, academic projects, or part-time work. Emphasize educational value, fair compensation for student work, flexible scheduling for studies, and protection against exploitative terms that might interfere with academic progress.",
        UserRole::Freelancer => "As a freelancer, focus on project-based work agreements, payment terms, intellectual property rights, scope creep protection, and client relationship management. Emphasize clear deliverables, milestone payments, and termination clauses that protect independent contractor status.",
        UserRole::Client => "As a client engaging freelancers or service providers, focus on service quality assurance, timely deliverables, confidentiality protection, and value for money. Emphasize clear expectations, performance standards, and remedies for non-compliance while maintaining fair terms.",
        UserRole::Startup => "As a startup, focus on cost-effective agreements, scalability clauses, intellectual property protection, and investor-friendly terms. Emphasize flexibility for growth, reasonable liability limits, and terms that don't hinder future funding or partnerships.",
        UserRole::Vendor => "As a vendor or service provider, focus on sustainable business terms, payment security, scope of work clarity, and long-term relationship building. Emphasize fair pricing, reasonable liability limits, and terms that support business growth and client retention.",
        UserRole::Legal => "As a legal professional, focus on comprehensive risk assessment, regulatory compliance, enforceability under applicable law, and professional liability considerations. Emphasize thorough analysis of all clauses, potential legal challenges, and industry best practices.",
    }
}

/// Legal-system notes keyed by jurisdiction name.
const JURISDICTION_CONTEXTS: &[(&str, &str)] = &[
    ("India", "India follows a mixed legal system with common law principles and civil law influences. Key considerations include the Indian Contract Act 1872, specific labor laws, GST implications, and jurisdiction-specific regulations. Courts favor written agreements and specific performance remedies."),
    ("United States", "The US follows common law with state-specific variations. Key considerations include at-will employment, strong intellectual property protections, extensive litigation culture, and state-specific contract laws. Arbitration clauses are generally enforceable."),
    ("United Kingdom", "The UK follows common law with emphasis on contractual freedom and precedent. Key considerations include unfair contract terms regulations, strong consumer protections, and Brexit-related commercial implications."),
    ("Germany", "Germany follows civil law with strict contractual formalities. Key considerations include BGB (Civil Code), strong employee protections, detailed consumer rights, and preference for written agreements with specific terms."),
    ("France", "France follows civil law with emphasis on good faith and contractual balance. Key considerations include Code Civil, strong consumer protections, mandatory employee benefits, and strict formality requirements."),
    ("Canada", "Canada follows common law (except Quebec - civil law) with federal and provincial jurisdiction variations. Key considerations include strong consumer protections, bilingual requirements in some provinces, and specific employment standards."),
    ("Australia", "Australia follows common law with consumer protection emphasis. Key considerations include Australian Consumer Law, unfair contract terms provisions, and state-specific variations in commercial law."),
    ("Japan", "Japan follows civil law with emphasis on consensus and long-term relationships. Key considerations include detailed written agreements, specific performance preferences, and cultural importance of maintaining business relationships."),
    ("Singapore", "Singapore follows common law with efficient dispute resolution. Key considerations include strong contract enforcement, international arbitration preferences, and business-friendly regulations."),
    ("UAE", "UAE follows civil law with Islamic law influences. Key considerations include Sharia-compliant terms, specific requirements for foreign businesses, and emphasis on local jurisdiction clauses."),
    ("China", "China follows civil law with socialist characteristics. Key considerations include specific foreign investment regulations, emphasis on local dispute resolution, and government approval requirements for certain contracts."),
    ("Brazil", "Brazil follows civil law with detailed consumer protections. Key considerations include strong employee rights, specific tax implications, and preference for local jurisdiction and Portuguese language terms."),
];

/// Legal-system notes for a jurisdiction.
///
/// Matching ignores ASCII case so title-cased acronyms ("Uae") still hit
/// their table entry. Unknown jurisdictions get a generic fragment naming them.
pub fn jurisdiction_context(country: &str) -> String {
    JURISDICTION_CONTEXTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(country))
        .map(|(_, context)| context.to_string())
        .unwrap_or_else(|| {
            format!(
                "Analyzing under {country} law. Consider local contract law principles, \
                 consumer protection regulations, employment standards, and \
                 jurisdiction-specific requirements. When in doubt, recommend consulting \
                 local legal counsel for {country}-specific advice."
            )
        })
}

/// Fills the master template for a validated request.
pub fn build_prompt(request: &AnalysisRequest) -> String {
    let country_context = jurisdiction_context(&request.country);
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{user_role}", request.user_role.as_str())
        .replace("{country}", &request.country)
        .replace("{role_context}", role_context(request.user_role))
        .replace("{country_context}", &country_context)
        // Last, so placeholder-looking text inside the contract is left alone.
        .replace("{contract_text}", &request.contract_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(role: UserRole, country: &str, text: &str) -> AnalysisRequest {
        AnalysisRequest {
            contract_text: text.to_string(),
            user_role: role,
            country: country.to_string(),
            user_id: None,
        }
    }

    #[test]
    fn test_every_role_has_distinct_context() {
        let contexts: Vec<&str> = UserRole::ALL.iter().map(|r| role_context(*r)).collect();
        for (i, a) in contexts.iter().enumerate() {
            assert!(a.starts_with("As a"));
            for b in &contexts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_known_jurisdiction_uses_table_entry() {
        assert!(jurisdiction_context("India").contains("Indian Contract Act 1872"));
        assert!(jurisdiction_context("Germany").contains("BGB"));
    }

    #[test]
    fn test_title_cased_acronym_still_matches() {
        assert!(jurisdiction_context("Uae").contains("Sharia-compliant"));
    }

    #[test]
    fn test_unknown_jurisdiction_falls_back() {
        let ctx = jurisdiction_context("Kenya");
        assert!(ctx.starts_with("Analyzing under Kenya law."));
        assert!(ctx.ends_with("local legal counsel for Kenya-specific advice."));
    }

    #[test]
    fn test_prompt_has_no_unfilled_placeholders() {
        let prompt = build_prompt(&request(UserRole::Vendor, "Brazil", "Vendor shall deliver goods."));
        for placeholder in [
            "{user_role}",
            "{country}",
            "{role_context}",
            "{country_context}",
            "{contract_text}",
        ] {
            assert!(!prompt.contains(placeholder), "left {placeholder} in prompt");
        }
        assert!(prompt.contains("a **vendor** in **Brazil**"));
        assert!(prompt.contains("```\nVendor shall deliver goods.\n```"));
    }

    #[test]
    fn test_contract_text_inserted_verbatim() {
        let text = "Party {country} agrees to pay \"$100\" within {30} days.";
        let prompt = build_prompt(&request(UserRole::Client, "France", text));
        assert!(prompt.contains(text));
    }

    #[test]
    fn test_prompt_keeps_literal_json_braces() {
        let prompt = build_prompt(&request(UserRole::Legal, "Japan", "x"));
        assert!(prompt.contains("\"legal_safety_index\": {"));
        assert!(prompt.contains("\"clauses\": ["));
    }
}
