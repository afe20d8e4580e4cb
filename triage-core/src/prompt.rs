//! The fixed triage instruction template.

/// Instruction template sent to the model for every inbox item.
///
/// `{content}` and `{patient_context}` are interpolated per case; the
/// braces in the response example are literal.
pub const TRIAGE_PROMPT: &str = r#"You are an AI clinical triage assistant for a New Zealand general practice.

Your task is to analyse inbox items and provide:
1. URGENCY classification: HIGH (requires same-day action), ROUTINE (1-3 days), or FYI (information only)
2. CONFIDENCE score: 0.0-1.0 indicating your certainty
3. KEY FINDINGS: 1-2 sentence clinical summary
4. RECOMMENDED ACTION: Specific next steps for the GP

Inbox Item:
{content}

Patient Context:
{patient_context}

Respond ONLY with valid JSON in this exact format:
{
  "urgency": "HIGH|ROUTINE|FYI",
  "confidence": 0.0-1.0,
  "key_findings": "Brief clinical summary",
  "recommended_action": "Specific next steps"
}"#;

/// Build the per-case prompt by interpolating content and context into
/// the fixed template.
pub fn render_triage_prompt(content: &str, patient_context: &str) -> String {
    TRIAGE_PROMPT
        .replace("{content}", content)
        .replace("{patient_context}", patient_context)
}
