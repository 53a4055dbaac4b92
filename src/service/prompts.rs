//! Prompts for LLM excuse generation

use crate::model::{ExcuseRequest, Language};

/// System prompt for excuse generation
pub const EXCUSE_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that generates believable, professional excuses.";

/// Language-specific instruction opening the prompt.
pub fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::En => "Generate a believable excuse in English",
        Language::Hi => "हिंदी में एक विश्वसनीय बहाना बनाएं",
        Language::Es => "Genera una excusa creíble en español",
        Language::Fr => "Générez une excuse crédible en français",
        Language::De => "Generieren Sie eine glaubwürdige Entschuldigung auf Deutsch",
    }
}

/// Build the generation prompt from the request parameters.
pub fn build_excuse_prompt(request: &ExcuseRequest) -> String {
    format!(
        r#"{instruction} for:

Category: {category}
Situation: {scenario}
Urgency: {urgency}

Requirements:
- Sound natural and believable
- Appropriate for {urgency} urgency
- 2-3 sentences maximum
- Include specific but reasonable details
- Professional and harmless tone

Generate only the excuse text."#,
        instruction = language_instruction(request.language),
        category = request.category,
        scenario = request.scenario,
        urgency = request.urgency,
    )
}
