//! Excuse generation orchestration
//!
//! Tries the LLM path first and falls back to the static catalog on any
//! failure. The fallback is single-shot: there is no retry loop around
//! the remote call.

use rand::Rng;
use rig::client::CompletionClient;

use crate::model::{ExcuseRequest, GeneratedExcuse};
use crate::service::catalog::ExcuseCatalog;
use crate::service::llm::LlmClient;
use crate::service::prompts::{build_excuse_prompt, EXCUSE_SYSTEM_PROMPT};
use crate::service::scoring;

/// Why the AI generation path did not produce an excuse.
///
/// Every variant is recovered locally by the catalog fallback and never
/// surfaced to the caller as an error.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("no LLM credential configured")]
    NotConfigured,

    #[error("completion failed: {0}")]
    Completion(String),

    #[error("completion was empty")]
    EmptyCompletion,
}

/// Orchestrates excuse generation across the LLM and the fallback catalog.
pub struct ExcuseGenerator {
    llm: Option<LlmClient>,
    catalog: ExcuseCatalog,
}

impl ExcuseGenerator {
    pub fn new(llm: Option<LlmClient>, catalog: ExcuseCatalog) -> Self {
        if llm.is_none() {
            tracing::info!("No LLM credential configured, running in fallback-only mode");
        }
        Self { llm, catalog }
    }

    /// Generate an excuse for the request. Infallible: any failure of the
    /// remote path maps to a catalog pick.
    pub async fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        request: &ExcuseRequest,
    ) -> GeneratedExcuse {
        match self.generate_remote(request).await {
            Ok(excuse) => {
                tracing::info!(
                    category = %request.category,
                    urgency = %request.urgency,
                    score = excuse.believability_score,
                    "Generated AI excuse"
                );
                excuse
            }
            Err(GenerationError::NotConfigured) => self.pick_fallback(rng, request),
            Err(e) => {
                tracing::warn!(error = %e, "LLM generation failed, falling back to catalog");
                self.pick_fallback(rng, request)
            }
        }
    }

    fn pick_fallback<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        request: &ExcuseRequest,
    ) -> GeneratedExcuse {
        self.catalog.pick(
            rng,
            &request.category,
            &request.scenario,
            request.urgency,
            request.language,
        )
    }

    /// One attempt against the LLM; the completion is trimmed and scored
    /// with the believability heuristic.
    async fn generate_remote(
        &self,
        request: &ExcuseRequest,
    ) -> Result<GeneratedExcuse, GenerationError> {
        let llm = self.llm.as_ref().ok_or(GenerationError::NotConfigured)?;

        let prompt = build_excuse_prompt(request);

        #[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
        struct ExcuseDraft {
            /// The excuse text, 2-3 sentences.
            excuse: String,
        }

        let extractor = llm
            .openai_client()
            .extractor::<ExcuseDraft>(llm.model())
            .preamble(EXCUSE_SYSTEM_PROMPT)
            .build();

        let draft = extractor
            .extract(&prompt)
            .await
            .map_err(|e| GenerationError::Completion(e.to_string()))?;

        let text = draft.excuse.trim().to_string();
        if text.is_empty() {
            return Err(GenerationError::EmptyCompletion);
        }

        let believability_score = scoring::score(&text, request.urgency);

        Ok(GeneratedExcuse {
            text,
            believability_score,
            category: request.category.clone(),
            scenario: request.scenario.clone(),
            urgency: request.urgency,
        })
    }
}
