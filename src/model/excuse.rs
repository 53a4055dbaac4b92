use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Urgency of the situation the excuse covers.
///
/// Drives both the fallback base score and the urgency-alignment bonus
/// in the believability scorer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Languages the generator and the fallback catalog know about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Es,
    Fr,
    De,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
        }
    }

    /// Parse a stored language code, defaulting to English for anything unknown.
    pub fn from_code(code: &str) -> Self {
        match code {
            "hi" => Language::Hi,
            "es" => Language::Es,
            "fr" => Language::Fr,
            "de" => Language::De,
            _ => Language::En,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of decorative proof artifacts the renderers can produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProofType {
    #[default]
    Email,
    Receipt,
    MedicalNote,
}

impl ProofType {
    /// Stable identifier stored in the proof_documents table.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProofType::Email => "email",
            ProofType::Receipt => "receipt",
            ProofType::MedicalNote => "medical_note",
        }
    }

    /// Short prefix used in generated filenames.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            ProofType::Email => "email",
            ProofType::Receipt => "receipt",
            ProofType::MedicalNote => "medical",
        }
    }
}

/// Parameters for one excuse generation request.
#[derive(Debug, Clone)]
pub struct ExcuseRequest {
    pub category: String,
    pub scenario: String,
    pub urgency: Urgency,
    pub language: Language,
}

/// A generated excuse before persistence: the text plus its score and the
/// request parameters it answers.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedExcuse {
    pub text: String,
    pub believability_score: f64,
    pub category: String,
    pub scenario: String,
    pub urgency: Urgency,
}
